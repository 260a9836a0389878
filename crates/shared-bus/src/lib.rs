//! # Shared Bus - Registry Event Delivery
//!
//! Carries committed `RegistryEvent`s from the registry service to any
//! number of subscribers (indexers, the node runtime's event printer).
//!
//! ```text
//! ┌──────────────────┐                    ┌──────────────┐
//! │ Registry Service │    publish()       │   Indexer    │
//! │                  │ ──────┐            │              │
//! └──────────────────┘       │            └──────────────┘
//!                            ▼                    ↑
//!                      ┌──────────────┐          │
//!                      │  Event Bus   │          │
//!                      │              │ ─────────┘
//!                      └──────────────┘  subscribe()
//! ```
//!
//! Only committed transitions are published. A rejected request never
//! reaches the bus.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::EventFilter;
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Events buffered per subscriber before the oldest are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;
