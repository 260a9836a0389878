//! Outbound (Driven) ports for the Domain Registry.
//!
//! The registry never touches balances directly. All value movement goes
//! through a [`ValueLedger`] supplied by the host.

use crate::config::RegistryConfig;
use shared_types::{Address, Amount};
use thiserror::Error;

/// Errors a ledger transfer can fail with.
///
/// A failed transfer must leave every balance unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The payer does not hold enough.
    #[error("Insufficient funds in {account}: available {available}, required {required}")]
    InsufficientFunds {
        account: Address,
        available: Amount,
        required: Amount,
    },

    /// The registry escrow does not hold enough.
    #[error("Insufficient escrow: available {available}, required {required}")]
    InsufficientEscrow { available: Amount, required: Amount },

    /// The recipient refused the payment.
    #[error("Recipient {account} rejected the transfer")]
    Rejected { account: Address },

    /// A balance would overflow.
    #[error("Balance overflow")]
    Overflow,
}

/// Value-transfer primitive.
///
/// Models the host's native currency: principal balances plus the single
/// escrow account the registry holds. Each call is atomic on its own; the
/// engine makes at most one call per operation, after every check has
/// passed, so a failure here rolls back the whole operation.
pub trait ValueLedger: Send + Sync {
    /// Current balance of a principal.
    fn balance_of(&self, account: &Address) -> Amount;

    /// Current balance of the registry escrow.
    fn escrow_balance(&self) -> Amount;

    /// Moves `amount` from `from` into escrow.
    fn collect(&mut self, from: &Address, amount: Amount) -> Result<(), TransferError>;

    /// Moves `amount` from escrow to `to`.
    fn pay_out(&mut self, to: &Address, amount: Amount) -> Result<(), TransferError>;
}

/// Source of the construction-time registry configuration.
pub trait ConfigProvider: Send + Sync {
    /// Configuration the engine should be built with.
    fn registry_config(&self) -> RegistryConfig;
}
