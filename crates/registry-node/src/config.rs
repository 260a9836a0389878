//! Configuration loading: TOML file (optional) plus environment overrides.

use anyhow::{Context, Result};
use nr_02_domain_registry::{RegistryConfig, TomlConfigProvider};
use shared_types::{parse_amount, Address};
use std::path::Path;
use tracing::info;

/// Minimum deposit override (decimal, smallest unit).
pub const ENV_MIN_DEPOSIT: &str = "NR_MIN_DEPOSIT";
/// Registration fee override (decimal, smallest unit).
pub const ENV_REGISTRATION_FEE: &str = "NR_REGISTRATION_FEE";
/// Treasury admin override (`0x` hex).
pub const ENV_ADMIN: &str = "NR_ADMIN";

/// Load configuration from the process environment and an optional file.
pub fn load_config(path: Option<&Path>) -> Result<RegistryConfig> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an explicit variable source.
///
/// The file (or defaults) is read first, then each set variable replaces
/// its field. The merged result is validated.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<RegistryConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => TomlConfigProvider::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
            .into_config(),
        None => RegistryConfig::default(),
    };

    if let Some(value) = lookup(ENV_MIN_DEPOSIT) {
        config.min_deposit =
            parse_amount(&value).with_context(|| format!("Invalid {ENV_MIN_DEPOSIT}"))?;
        info!(min_deposit = %config.min_deposit, "Loaded minimum deposit from environment");
    }

    if let Some(value) = lookup(ENV_REGISTRATION_FEE) {
        config.registration_fee =
            parse_amount(&value).with_context(|| format!("Invalid {ENV_REGISTRATION_FEE}"))?;
        info!(fee = %config.registration_fee, "Loaded registration fee from environment");
    }

    if let Some(value) = lookup(ENV_ADMIN) {
        config.admin = value
            .parse::<Address>()
            .with_context(|| format!("Invalid {ENV_ADMIN}"))?;
        info!(admin = %config.admin, "Loaded treasury admin from environment");
    }

    config.validate().context("Invalid registry configuration")?;
    Ok(config)
}
