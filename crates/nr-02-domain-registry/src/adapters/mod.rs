//! Adapters layer for the Domain Registry.
//!
//! - `ledger`: `InMemoryLedger`, a self-contained `ValueLedger`
//! - `config_file`: `StaticConfigProvider` and `TomlConfigProvider`

pub mod config_file;
pub mod ledger;

pub use config_file::{StaticConfigProvider, TomlConfigProvider};
pub use ledger::InMemoryLedger;
