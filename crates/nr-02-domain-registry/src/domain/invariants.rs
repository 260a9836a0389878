//! Domain invariants for the Domain Registry
//!
//! | Invariant | Check |
//! |-----------|-------|
//! | One controller per name, never zero | `invariant_single_controller` |
//! | No orphans: a reserved name's registry parent is reserved | `invariant_no_orphans` |
//! | Child counters match the reserved direct children | `invariant_child_counts` |
//! | Every deposit is at least the minimum | `invariant_minimum_deposit` |
//! | Escrow equals deposits plus treasury | `invariant_escrow_balance` |
//!
//! Release refuses a name whose child counter is non-zero, so correct
//! counters are what keep a parent with reserved descendants in place.

use super::store::RegistryStore;
use super::treasury::Treasury;
use crate::config::RegistryConfig;
use nr_01_name_validator::NameKey;
use shared_types::Amount;
use std::collections::HashMap;
use thiserror::Error;

/// A broken invariant found by [`check_all_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A stored entry is keyed by something other than its name's hash.
    #[error("{name} is stored under a foreign key")]
    KeyMismatch { name: String },

    /// A stored entry has the zero controller.
    #[error("{name} is stored with a zero controller")]
    ZeroController { name: String },

    /// A stored name is shallower than the top-level policy allows.
    #[error("{name} is shallower than the top-level policy allows")]
    BelowPolicyDepth { name: String },

    /// A reserved name whose registry parent is not reserved.
    #[error("{name} is reserved but its parent {parent} is not")]
    Orphan { name: String, parent: String },

    /// A child counter disagrees with the reserved direct children.
    #[error("{name} records {recorded} children but has {actual}")]
    ChildCountMismatch {
        name: String,
        recorded: u64,
        actual: u64,
    },

    /// A deposit below the configured minimum.
    #[error("{name} holds {deposit}, below minimum {minimum}")]
    DepositBelowMinimum {
        name: String,
        deposit: Amount,
        minimum: Amount,
    },

    /// Escrow does not equal deposits plus treasury.
    #[error("Escrow {escrow} != deposits {deposits} + treasury {treasury}")]
    EscrowMismatch {
        escrow: Amount,
        deposits: Amount,
        treasury: Amount,
    },
}

pub fn invariant_single_controller(store: &RegistryStore) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    for (key, reg) in store.entries() {
        if *key != reg.key() {
            violations.push(InvariantViolation::KeyMismatch {
                name: reg.name.to_string(),
            });
        }
        if reg.controller.is_zero() {
            violations.push(InvariantViolation::ZeroController {
                name: reg.name.to_string(),
            });
        }
    }
    violations
}

pub fn invariant_no_orphans(
    store: &RegistryStore,
    config: &RegistryConfig,
) -> Vec<InvariantViolation> {
    let policy = config.top_level_policy;
    let mut violations = Vec::new();

    for reg in store.iter() {
        if reg.name.depth() < policy.min_depth() {
            violations.push(InvariantViolation::BelowPolicyDepth {
                name: reg.name.to_string(),
            });
            continue;
        }
        if !policy.requires_parent(reg.name.depth()) {
            continue;
        }
        if let Some(parent) = reg.name.parent() {
            if !store.contains(&parent.key()) {
                violations.push(InvariantViolation::Orphan {
                    name: reg.name.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
    }
    violations
}

pub fn invariant_child_counts(store: &RegistryStore) -> Vec<InvariantViolation> {
    let mut actual: HashMap<NameKey, u64> = HashMap::new();
    for reg in store.iter() {
        if let Some(parent) = reg.name.parent() {
            let key = parent.key();
            if store.contains(&key) {
                *actual.entry(key).or_insert(0) += 1;
            }
        }
    }

    store
        .entries()
        .filter_map(|(key, reg)| {
            let actual = actual.get(key).copied().unwrap_or(0);
            (reg.child_count != actual).then(|| InvariantViolation::ChildCountMismatch {
                name: reg.name.to_string(),
                recorded: reg.child_count,
                actual,
            })
        })
        .collect()
}

pub fn invariant_minimum_deposit(
    store: &RegistryStore,
    config: &RegistryConfig,
) -> Vec<InvariantViolation> {
    store
        .iter()
        .filter(|reg| reg.deposit < config.min_deposit)
        .map(|reg| InvariantViolation::DepositBelowMinimum {
            name: reg.name.to_string(),
            deposit: reg.deposit,
            minimum: config.min_deposit,
        })
        .collect()
}

pub fn invariant_escrow_balance(
    store: &RegistryStore,
    treasury: &Treasury,
    escrow: Amount,
) -> Option<InvariantViolation> {
    let deposits = store.total_deposits();
    let expected = deposits.checked_add(treasury.balance());
    (expected != Some(escrow)).then(|| InvariantViolation::EscrowMismatch {
        escrow,
        deposits,
        treasury: treasury.balance(),
    })
}

/// Runs every check and returns all violations found.
#[must_use]
pub fn check_all_invariants(
    store: &RegistryStore,
    treasury: &Treasury,
    config: &RegistryConfig,
    escrow: Amount,
) -> Vec<InvariantViolation> {
    let mut violations = invariant_single_controller(store);
    violations.extend(invariant_no_orphans(store, config));
    violations.extend(invariant_child_counts(store));
    violations.extend(invariant_minimum_deposit(store, config));
    violations.extend(invariant_escrow_balance(store, treasury, escrow));
    violations
}
