//! # NR-02: Domain Registry Subsystem
//!
//! Reserves hierarchical dotted names against refundable deposits held in
//! escrow. A name may be reserved only when its parent is, and released only
//! when it has no children left.
//!
//! ## Operations
//!
//! | Operation          | Caller             | Value flow                          |
//! |--------------------|--------------------|-------------------------------------|
//! | `reserve`          | anyone             | caller → escrow (fee → treasury)    |
//! | `change_deposit`   | controller         | delta in either direction           |
//! | `transfer_control` | controller         | none                                |
//! | `release`          | controller         | escrow → controller (full deposit)  |
//! | `withdraw_funds`   | treasury admin     | treasury → recipient                |
//!
//! Each operation either commits completely and yields one `RegistryEvent`,
//! or fails and leaves the store, treasury and ledger untouched.
//!
//! ## Architecture
//!
//! - **Domain**: `RegistryStore`, `Treasury`, `ReservationEngine`, invariants
//! - **Ports**: Inbound (`DomainRegistryApi`) and Outbound (`ValueLedger`, `ConfigProvider`)
//! - **Adapters**: `InMemoryLedger`, `TomlConfigProvider`, `StaticConfigProvider`
//! - **Application**: `RegistryService`, async front that publishes events
//! - **IPC**: Request envelopes and responses for message-driven hosts

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{InMemoryLedger, StaticConfigProvider, TomlConfigProvider};
pub use application::{OperationStats, RegistryService, ServiceStats};
pub use config::{ConfigError, RegistryConfig, TopLevelPolicy};
pub use domain::engine::ReservationEngine;
pub use domain::entities::{Operation, Registration};
pub use domain::errors::RegistryError;
pub use domain::invariants::{check_all_invariants, InvariantViolation};
pub use domain::store::RegistryStore;
pub use domain::treasury::Treasury;
pub use ipc::{RegistryRequest, RegistryResponse, RequestEnvelope};
pub use ports::inbound::DomainRegistryApi;
pub use ports::outbound::{ConfigProvider, TransferError, ValueLedger};
