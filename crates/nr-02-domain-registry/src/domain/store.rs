//! # Registry Store
//!
//! Content-addressed table of reserved names.
//!
//! - Keyed by [`NameKey`] (Keccak-256 of the canonical name), point lookups only
//! - Sole owner of [`Registration`] records
//! - Keeps each parent's `child_count` in step with inserts and removals
//!
//! Mutators are infallible and crate-private. The engine performs every check
//! before calling them, so a store mutation never has to be undone.

use super::entities::Registration;
use nr_01_name_validator::{DomainName, NameKey};
use shared_types::{Address, Amount};
use std::collections::HashMap;

/// Map from name key to registration.
///
/// `Clone` + `PartialEq` so callers can snapshot the whole table and compare
/// it after a rejected operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryStore {
    entries: HashMap<NameKey, Registration>,
}

impl RegistryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reserved names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &NameKey) -> Option<&Registration> {
        self.entries.get(key)
    }

    /// Looks up a validated name.
    #[must_use]
    pub fn lookup(&self, name: &DomainName) -> Option<&Registration> {
        self.entries.get(&name.key())
    }

    #[must_use]
    pub fn contains(&self, key: &NameKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates every registration in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.values()
    }

    /// Iterates `(key, registration)` pairs in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&NameKey, &Registration)> {
        self.entries.iter()
    }

    /// Sum of all deposits.
    #[must_use]
    pub fn total_deposits(&self) -> Amount {
        self.entries
            .values()
            .fold(Amount::zero(), |acc, reg| acc.saturating_add(reg.deposit))
    }

    /// Inserts a registration the engine has checked is absent and bumps the
    /// parent's child counter when the parent is stored.
    pub(crate) fn insert(&mut self, registration: Registration) {
        if let Some(parent) = registration.name.parent() {
            if let Some(entry) = self.entries.get_mut(&parent.key()) {
                entry.child_count += 1;
            }
        }
        self.entries.insert(registration.key(), registration);
    }

    /// Removes a registration and decrements the parent's child counter.
    pub(crate) fn remove(&mut self, key: &NameKey) -> Option<Registration> {
        let removed = self.entries.remove(key)?;
        if let Some(parent) = removed.name.parent() {
            if let Some(entry) = self.entries.get_mut(&parent.key()) {
                entry.child_count = entry.child_count.saturating_sub(1);
            }
        }
        Some(removed)
    }

    /// Returns false if the key is not stored.
    pub(crate) fn set_controller(&mut self, key: &NameKey, controller: Address) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.controller = controller;
                true
            }
            None => false,
        }
    }

    /// Returns false if the key is not stored.
    pub(crate) fn set_deposit(&mut self, key: &NameKey, deposit: Amount) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.deposit = deposit;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn entry_mut(&mut self, key: &NameKey) -> Option<&mut Registration> {
        self.entries.get_mut(key)
    }
}
