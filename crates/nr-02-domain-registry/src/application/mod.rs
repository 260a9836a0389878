//! Application layer: the async service hosts talk to.

pub mod service;

pub use service::{OperationStats, RegistryService, ServiceStats};
