//! Validated names and their content keys

use super::errors::NameError;
use super::labels::{normalize, parent_of, split_labels, SEPARATOR};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;

/// A name that has passed validation.
///
/// Holds the canonical text (scheme stripped) and the label count. The only
/// way to obtain one is [`DomainName::parse`], so any `DomainName` in hand is
/// known to be well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName {
    canonical: String,
    depth: usize,
}

impl DomainName {
    /// Normalizes and validates `raw`.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let name = normalize(raw)?;
        let depth = split_labels(name)?.len();
        Ok(Self {
            canonical: name.to_owned(),
            depth,
        })
    }

    /// Canonical text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Labels in left-to-right order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.canonical.split(SEPARATOR)
    }

    /// Number of labels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True for a name with a single label, e.g. `com`.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.depth == 1
    }

    /// The name with its leftmost label removed.
    ///
    /// A suffix of a valid name is itself valid, so no re-validation is needed.
    #[must_use]
    pub fn parent(&self) -> Option<DomainName> {
        parent_of(&self.canonical).map(|parent| Self {
            canonical: parent.to_owned(),
            depth: self.depth - 1,
        })
    }

    /// Keccak-256 of the canonical text.
    #[must_use]
    pub fn key(&self) -> NameKey {
        NameKey::of(&self.canonical)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for DomainName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainName> for String {
    fn from(name: DomainName) -> Self {
        name.canonical
    }
}

impl std::str::FromStr for DomainName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fixed-size content address of a canonical name.
///
/// The registry keys its table by this rather than by the string itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey([u8; 32]);

impl NameKey {
    /// Hashes `canonical` without validating it.
    #[must_use]
    pub fn of(canonical: &str) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(canonical.as_bytes());
        Self(hasher.finalize().into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey(0x{})", hex::encode(self.0))
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
