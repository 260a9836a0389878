//! Ports layer for the Domain Registry.
//!
//! - `inbound`: `DomainRegistryApi`, the state-machine API
//! - `outbound`: `ValueLedger` (value transfers), `ConfigProvider`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
