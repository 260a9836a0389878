//! # Reservation Engine
//!
//! The per-name state machine `Unreserved → Reserved → Unreserved`.
//!
//! ## Atomicity
//!
//! Every operation runs in three phases:
//!
//! 1. **Check**: validate the name, look up own and parent state, check the
//!    caller and every argument. Nothing is written.
//! 2. **Transfer**: at most one ledger call. The ledger call is atomic on its
//!    own, so a failure here leaves everything as it was.
//! 3. **Commit**: infallible store and treasury writes.
//!
//! A rejected operation therefore never leaves a partial write behind.
//!
//! ## Check order
//!
//! name validity → existence → controller → arguments → payment → transfer

use super::entities::Registration;
use super::errors::RegistryError;
use super::invariants::{check_all_invariants, InvariantViolation};
use super::store::RegistryStore;
use super::treasury::Treasury;
use crate::config::{ConfigError, RegistryConfig};
use crate::ports::inbound::DomainRegistryApi;
use crate::ports::outbound::ValueLedger;
use nr_01_name_validator::{DomainName, NameKey};
use shared_types::{Address, Amount, RegistryEvent};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Registry state machine over a value ledger.
#[derive(Debug)]
pub struct ReservationEngine<L: ValueLedger> {
    config: RegistryConfig,
    store: RegistryStore,
    treasury: Treasury,
    ledger: L,
}

impl<L: ValueLedger> ReservationEngine<L> {
    /// Builds an engine over an injected store and ledger.
    ///
    /// # Errors
    /// Returns the `ConfigError` from `RegistryConfig::validate`.
    pub fn new(
        config: RegistryConfig,
        store: RegistryStore,
        ledger: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let treasury = Treasury::new(config.admin);
        info!(
            min_deposit = %config.min_deposit,
            registration_fee = %config.registration_fee,
            admin = %config.admin,
            policy = ?config.top_level_policy,
            "Reservation engine initialized"
        );
        Ok(Self {
            config,
            store,
            treasury,
            ledger,
        })
    }

    /// Engine over an empty store.
    pub fn with_ledger(config: RegistryConfig, ledger: L) -> Result<Self, ConfigError> {
        Self::new(config, RegistryStore::new(), ledger)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &RegistryStore {
        &self.store
    }

    #[must_use]
    pub fn treasury(&self) -> &Treasury {
        &self.treasury
    }

    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable ledger access for the host, e.g. to fund principals.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Full record for a reserved name.
    #[must_use]
    pub fn registration(&self, name: &str) -> Option<&Registration> {
        let name = DomainName::parse(name).ok()?;
        self.store.lookup(&name)
    }

    /// Number of reserved direct children, zero if unreserved or invalid.
    #[must_use]
    pub fn child_count(&self, name: &str) -> u64 {
        self.registration(name).map_or(0, |reg| reg.child_count)
    }

    /// Value the registry holds in escrow (deposits plus treasury).
    #[must_use]
    pub fn total_escrowed(&self) -> Amount {
        self.ledger.escrow_balance()
    }

    #[must_use]
    pub fn treasury_balance(&self) -> Amount {
        self.treasury.balance()
    }

    /// Checks every store, treasury and escrow invariant.
    ///
    /// # Errors
    /// Every violation found, in check order.
    pub fn verify_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        let violations = check_all_invariants(
            &self.store,
            &self.treasury,
            &self.config,
            self.ledger.escrow_balance(),
        );
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    // =========================================================================
    // CHECK HELPERS
    // =========================================================================

    /// Resolves a reserved name controlled by `caller`.
    fn controlled(
        &self,
        caller: &Address,
        raw: &str,
    ) -> Result<(DomainName, NameKey, Registration), RegistryError> {
        let name = DomainName::parse(raw)?;
        let key = name.key();
        let reg = self
            .store
            .get(&key)
            .ok_or_else(|| RegistryError::NotReserved(name.to_string()))?;
        if reg.controller != *caller {
            return Err(RegistryError::NotController {
                name: name.to_string(),
                caller: *caller,
            });
        }
        Ok((name, key, reg.clone()))
    }

    /// Rejects names the top-level policy does not allow and names whose
    /// registry parent is unreserved.
    fn check_hierarchy(&self, name: &DomainName) -> Result<(), RegistryError> {
        let policy = self.config.top_level_policy;
        if name.depth() < policy.min_depth() {
            return Err(RegistryError::MustBeSubdomain {
                name: name.to_string(),
                depth: name.depth(),
                min_depth: policy.min_depth(),
            });
        }
        if self.store.contains(&name.key()) {
            return Err(RegistryError::AlreadyReserved(name.to_string()));
        }
        if !policy.requires_parent(name.depth()) {
            return Ok(());
        }
        match name.parent() {
            Some(parent) if !self.store.contains(&parent.key()) => {
                Err(RegistryError::ParentMissing {
                    name: name.to_string(),
                    parent: parent.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl<L: ValueLedger> DomainRegistryApi for ReservationEngine<L> {
    fn reserve(
        &mut self,
        caller: Address,
        raw: &str,
        payment: Amount,
    ) -> Result<RegistryEvent, RegistryError> {
        // Check
        let name = DomainName::parse(raw)?;
        self.check_hierarchy(&name)?;
        if caller.is_zero() {
            return Err(RegistryError::InvalidController);
        }
        let required = self
            .config
            .required_payment()
            .ok_or(RegistryError::ArithmeticOverflow)?;
        if payment < required {
            return Err(RegistryError::InsufficientDeposit {
                provided: payment,
                required,
            });
        }
        let fee = self.config.registration_fee;
        let deposit = payment
            .checked_sub(fee)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        let treasury_after = self.treasury.balance_with(fee)?;

        // Transfer
        self.ledger.collect(&caller, payment)?;

        // Commit
        self.treasury.set_balance(treasury_after);
        self.store
            .insert(Registration::new(name.clone(), caller, deposit));

        info!(name = %name, controller = %caller, deposit = %deposit, fee = %fee, "Domain reserved");
        Ok(RegistryEvent::DomainReserved {
            name: name.into(),
            controller: caller,
            amount: deposit,
        })
    }

    fn change_deposit(
        &mut self,
        caller: Address,
        raw: &str,
        new_amount: Amount,
        supplied_value: Amount,
    ) -> Result<RegistryEvent, RegistryError> {
        // Check
        let (name, key, reg) = self.controlled(&caller, raw)?;
        if new_amount < self.config.min_deposit {
            return Err(RegistryError::BelowMinimum {
                requested: new_amount,
                minimum: self.config.min_deposit,
            });
        }

        // Transfer
        match new_amount.cmp(&reg.deposit) {
            Ordering::Greater => {
                let delta = new_amount - reg.deposit;
                if supplied_value < delta {
                    return Err(RegistryError::InsufficientPayment {
                        supplied: supplied_value,
                        required: delta,
                    });
                }
                self.ledger.collect(&caller, delta)?;
            }
            Ordering::Less => {
                let delta = reg.deposit - new_amount;
                self.ledger.pay_out(&reg.controller, delta)?;
            }
            Ordering::Equal => {
                debug!(name = %name, "Deposit unchanged");
            }
        }

        // Commit
        let updated = self.store.set_deposit(&key, new_amount);
        debug_assert!(updated, "controlled name vanished before commit");

        info!(name = %name, old = %reg.deposit, new = %new_amount, "Deposit changed");
        Ok(RegistryEvent::DepositChanged {
            name: name.into(),
            new_amount,
        })
    }

    fn transfer_control(
        &mut self,
        caller: Address,
        raw: &str,
        new_controller: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        let (name, key, _) = self.controlled(&caller, raw)?;
        if new_controller.is_zero() {
            return Err(RegistryError::InvalidController);
        }

        let updated = self.store.set_controller(&key, new_controller);
        debug_assert!(updated, "controlled name vanished before commit");

        info!(name = %name, from = %caller, to = %new_controller, "Domain control transferred");
        Ok(RegistryEvent::DomainControlTransferred {
            name: name.into(),
            new_controller,
        })
    }

    fn release(&mut self, caller: Address, raw: &str) -> Result<RegistryEvent, RegistryError> {
        // Check
        let (name, key, reg) = self.controlled(&caller, raw)?;
        if reg.has_children() {
            return Err(RegistryError::HasChildren {
                name: name.to_string(),
                children: reg.child_count,
            });
        }

        // Transfer
        self.ledger.pay_out(&reg.controller, reg.deposit)?;

        // Commit
        let removed = self.store.remove(&key);
        debug_assert!(removed.is_some(), "controlled name vanished before commit");

        info!(name = %name, controller = %reg.controller, refunded = %reg.deposit, "Domain released");
        Ok(RegistryEvent::DomainReleased {
            name: name.into(),
            former_controller: reg.controller,
            refunded_amount: reg.deposit,
        })
    }

    fn withdraw_funds(
        &mut self,
        caller: Address,
        to: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        // Check
        if !self.treasury.is_admin(&caller) {
            return Err(RegistryError::Unauthorized { caller });
        }
        if to.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }
        let amount = self.treasury.balance();
        if amount.is_zero() {
            return Err(RegistryError::NothingToWithdraw);
        }

        // Transfer
        self.ledger.pay_out(&to, amount)?;

        // Commit
        let drained = self.treasury.drain();
        debug_assert_eq!(drained, amount);

        info!(to = %to, amount = %amount, "Treasury withdrawn");
        Ok(RegistryEvent::FundsWithdrawn { to, amount })
    }

    fn controller_of(&self, name: &str) -> Address {
        self.registration(name)
            .map_or(Address::ZERO, |reg| reg.controller)
    }

    fn deposit_of(&self, name: &str) -> Amount {
        self.registration(name)
            .map_or(Amount::zero(), |reg| reg.deposit)
    }

    fn total_reserved(&self) -> usize {
        self.store.len()
    }
}
