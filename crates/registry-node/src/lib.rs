//! # Registry Node Runtime
//!
//! Hosts the domain registry for scripted runs.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`registry-telemetry`, env driven)
//! 2. Load configuration (TOML file, then `NR_*` env overrides)
//! 3. Build engine, event bus and service
//! 4. Fund principals and replay the script
//! 5. Print the final report and verify invariants
//!
//! ```text
//! script.json ──steps──→ RegistryService ──events──→ Event Bus ──→ log
//!                              │
//!                              └──responses──→ stdout (JSON lines)
//! ```

pub mod config;
pub mod runtime;
pub mod script;

pub use config::{load_config, load_config_with};
pub use runtime::{FinalReport, NodeRuntime, RegistrationReport};
pub use script::{Funding, Script, Step};
