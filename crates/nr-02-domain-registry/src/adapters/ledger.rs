//! In-memory value ledger
//!
//! Principal balances plus one escrow account, for hosts without a native
//! currency and for tests. Accounts can be marked as rejecting incoming
//! payments to exercise refund failures.

use crate::ports::outbound::{TransferError, ValueLedger};
use shared_types::{Address, Amount};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<Address, Amount>,
    escrow: Amount,
    rejecting: HashSet<Address>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InMemoryLedger::fund`] for fixtures.
    #[must_use]
    pub fn with_balance(mut self, account: Address, amount: Amount) -> Self {
        let current = self.balance_of(&account);
        self.balances
            .insert(account, current.saturating_add(amount));
        self
    }

    /// Mints `amount` into `account`.
    pub fn fund(&mut self, account: Address, amount: Amount) -> Result<(), TransferError> {
        let next = self
            .balance_of(&account)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;
        self.balances.insert(account, next);
        debug!(%account, %amount, "Account funded");
        Ok(())
    }

    /// Makes every payout to `account` fail with `Rejected`.
    pub fn reject_payments_to(&mut self, account: Address) {
        self.rejecting.insert(account);
    }

    /// Undoes [`InMemoryLedger::reject_payments_to`].
    pub fn accept_payments_to(&mut self, account: &Address) {
        self.rejecting.remove(account);
    }

    /// Sum of every principal balance plus escrow.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.balances
            .values()
            .fold(self.escrow, |acc, b| acc.saturating_add(*b))
    }
}

impl ValueLedger for InMemoryLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn escrow_balance(&self) -> Amount {
        self.escrow
    }

    fn collect(&mut self, from: &Address, amount: Amount) -> Result<(), TransferError> {
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientFunds {
                account: *from,
                available,
                required: amount,
            })?;
        let escrow = self
            .escrow
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        self.balances.insert(*from, remaining);
        self.escrow = escrow;
        Ok(())
    }

    fn pay_out(&mut self, to: &Address, amount: Amount) -> Result<(), TransferError> {
        if self.rejecting.contains(to) {
            return Err(TransferError::Rejected { account: *to });
        }
        let escrow = self
            .escrow
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientEscrow {
                available: self.escrow,
                required: amount,
            })?;
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        self.escrow = escrow;
        self.balances.insert(*to, balance);
        Ok(())
    }
}
