use crate::config::{ConfigError, RegistryConfig, TopLevelPolicy};
use crate::ports::outbound::ConfigProvider;
use serde::Deserialize;
use shared_types::{parse_amount, Address};
use std::fs;
use std::path::Path;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider.
///
/// Useful for testing and development. For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: RegistryConfig,
}

impl StaticConfigProvider {
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn registry_config(&self) -> RegistryConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading
// ============================================================================

/// Configuration file structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    registry: RegistryFile,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    min_deposit: Option<String>,
    registration_fee: Option<String>,
    admin: Option<String>,
    top_level_policy: Option<TopLevelPolicy>,
}

/// TOML-based configuration provider.
///
/// Missing keys fall back to `RegistryConfig::default()`. The result is not
/// validated here so callers can still apply overrides; the engine validates
/// on construction.
///
/// # Config File Format
///
/// ```toml
/// [registry]
/// min_deposit = "1000000000000000000"   # decimal, smallest unit
/// registration_fee = "0"
/// admin = "0x00000000000000000000000000000000000000ad"
/// top_level_policy = "public_suffix"    # or "reservable"
/// ```
#[derive(Debug, Clone)]
pub struct TomlConfigProvider {
    config: RegistryConfig,
}

impl TomlConfigProvider {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = RegistryConfig::default();
        let rf = file.registry;
        let config = RegistryConfig {
            min_deposit: match rf.min_deposit {
                Some(s) => parse_amount(&s)
                    .map_err(|e| ConfigError::Invalid(format!("min_deposit: {e}")))?,
                None => defaults.min_deposit,
            },
            registration_fee: match rf.registration_fee {
                Some(s) => parse_amount(&s)
                    .map_err(|e| ConfigError::Invalid(format!("registration_fee: {e}")))?,
                None => defaults.registration_fee,
            },
            admin: match rf.admin {
                Some(s) => s
                    .parse::<Address>()
                    .map_err(|e| ConfigError::Invalid(format!("admin: {e}")))?,
                None => defaults.admin,
            },
            top_level_policy: rf.top_level_policy.unwrap_or(defaults.top_level_policy),
        };

        Ok(Self { config })
    }

    #[must_use]
    pub fn into_config(self) -> RegistryConfig {
        self.config
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn registry_config(&self) -> RegistryConfig {
        self.config.clone()
    }
}
