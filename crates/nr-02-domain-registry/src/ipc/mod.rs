//! IPC layer for the Domain Registry.

pub mod payloads;

pub use payloads::{RegistryRequest, RegistryResponse, RequestEnvelope};
