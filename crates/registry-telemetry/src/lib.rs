//! # Registry Telemetry
//!
//! Structured logging for the name registry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registry_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NR_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `NR_JSON_LOGS` | `false` | JSON output instead of pretty |
//! | `NR_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |
//! | `NR_SERVICE_NAME` | `name-registry` | Service name on every line |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Convenience macro for creating a span with subsystem context.
///
/// ```rust,ignore
/// let _span = subsystem_span!("replay", subsystem = "registry-node", steps = 12).entered();
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
