//! Replay scripts.
//!
//! ```json
//! {
//!   "funding": [
//!     { "account": "0x00000000000000000000000000000000000000a1", "amount": "5000000000000000000" }
//!   ],
//!   "steps": [
//!     {
//!       "caller": "0x00000000000000000000000000000000000000a1",
//!       "request": { "op": "reserve", "name": "example.com", "payment": "1000000000000000000" }
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use nr_02_domain_registry::{RegistryRequest, RequestEnvelope};
use serde::{Deserialize, Serialize};
use shared_types::{decimal, Address, Amount};
use std::path::Path;

/// Initial balance credited to a principal before replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funding {
    pub account: Address,
    #[serde(with = "decimal")]
    pub amount: Amount,
}

/// One request and the principal issuing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub caller: Address,
    pub request: RegistryRequest,
}

impl Step {
    #[must_use]
    pub fn into_envelope(self) -> RequestEnvelope {
        RequestEnvelope::new(self.caller, self.request)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub funding: Vec<Funding>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse script {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
