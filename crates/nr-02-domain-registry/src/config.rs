//! Configuration for the Domain Registry
//!
//! Fixed at construction. Nothing here changes while the engine is running.

use serde::{Deserialize, Serialize};
use shared_types::{decimal, units, Address, Amount};
use thiserror::Error;

/// Which names may be reserved without a reserved parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelPolicy {
    /// The rightmost label is a public suffix nobody owns.
    ///
    /// Single-label names are rejected, two-label names are roots and
    /// anything deeper needs its parent reserved.
    #[default]
    PublicSuffix,

    /// Single-label names are ordinary reservable names and every deeper
    /// name needs its parent reserved.
    Reservable,
}

impl TopLevelPolicy {
    /// Smallest label count a reservable name may have.
    #[must_use]
    pub fn min_depth(self) -> usize {
        match self {
            Self::PublicSuffix => 2,
            Self::Reservable => 1,
        }
    }

    /// True if a name of `depth` labels needs its parent reserved first.
    #[must_use]
    pub fn requires_parent(self, depth: usize) -> bool {
        depth > self.min_depth()
    }
}

/// Registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Smallest deposit a reserved name may hold.
    #[serde(with = "decimal")]
    pub min_deposit: Amount,
    /// Non-refundable part of every reservation payment, credited to the
    /// treasury.
    #[serde(with = "decimal")]
    pub registration_fee: Amount,
    /// Principal allowed to withdraw the treasury.
    pub admin: Address,
    /// Top-level reservation rule.
    pub top_level_policy: TopLevelPolicy,
}

impl RegistryConfig {
    /// Default config administered by `admin`.
    #[must_use]
    pub fn with_admin(admin: Address) -> Self {
        Self {
            admin,
            ..Self::default()
        }
    }

    /// Payment a reservation needs at minimum.
    ///
    /// `None` if minimum plus fee overflows, which `validate` rejects.
    #[must_use]
    pub fn required_payment(&self) -> Option<Amount> {
        self.min_deposit.checked_add(self.registration_fee)
    }

    /// Rejects configurations the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin.is_zero() {
            return Err(ConfigError::ZeroAdmin);
        }
        if self.min_deposit.is_zero() {
            return Err(ConfigError::ZeroMinimumDeposit);
        }
        if self.required_payment().is_none() {
            return Err(ConfigError::Invalid(
                "min_deposit + registration_fee overflows".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    /// 1 whole unit minimum, no fee, public-suffix policy.
    ///
    /// The default admin is the zero address, so a default config must be
    /// given an admin before it passes `validate`.
    fn default() -> Self {
        Self {
            min_deposit: units(1),
            registration_fee: Amount::zero(),
            admin: Address::ZERO,
            top_level_policy: TopLevelPolicy::PublicSuffix,
        }
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value was present but malformed.
    #[error("Invalid config value: {0}")]
    Invalid(String),

    /// No administrator configured.
    #[error("Admin address must not be zero")]
    ZeroAdmin,

    /// A zero minimum would let names be held for free.
    #[error("Minimum deposit must be greater than zero")]
    ZeroMinimumDeposit,
}
