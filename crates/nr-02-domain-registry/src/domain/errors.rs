//! Error types for the Domain Registry
//!
//! Every variant is returned synchronously to the caller and leaves the
//! registry, treasury and ledger untouched.

use crate::ports::outbound::TransferError;
use nr_01_name_validator::NameError;
use shared_types::{Address, Amount};
use thiserror::Error;

/// All errors a registry operation can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The name failed validation.
    #[error("Invalid domain format: {0}")]
    InvalidFormat(#[from] NameError),

    /// The top-level policy does not allow names this shallow.
    #[error("Must be a subdomain: {name} has {depth} label(s), at least {min_depth} required")]
    MustBeSubdomain {
        name: String,
        depth: usize,
        min_depth: usize,
    },

    /// The name already has a controller.
    #[error("Domain already reserved: {0}")]
    AlreadyReserved(String),

    /// The registry parent is not reserved.
    #[error("Parent domain must exist: {parent} (required by {name})")]
    ParentMissing { name: String, parent: String },

    /// Reservation payment below minimum deposit plus fee.
    #[error("Insufficient deposit: provided {provided}, required {required}")]
    InsufficientDeposit { provided: Amount, required: Amount },

    /// Supplied value does not cover a deposit increase.
    #[error("Insufficient payment: supplied {supplied}, required {required}")]
    InsufficientPayment { supplied: Amount, required: Amount },

    /// Requested deposit is below the configured minimum.
    #[error("Deposit below minimum: requested {requested}, minimum {minimum}")]
    BelowMinimum { requested: Amount, minimum: Amount },

    /// The name is not reserved.
    #[error("Domain not reserved: {0}")]
    NotReserved(String),

    /// The caller does not control the name.
    #[error("Only the controller can modify {name} (caller {caller})")]
    NotController { name: String, caller: Address },

    /// The zero principal cannot control a name.
    #[error("Invalid controller: zero address")]
    InvalidController,

    /// Reserved children must be released first.
    #[error("Remove child domains first: {name} has {children} reserved child(ren)")]
    HasChildren { name: String, children: u64 },

    /// Caller is not the treasury administrator.
    #[error("Unauthorized: {caller} is not the admin")]
    Unauthorized { caller: Address },

    /// Treasury balance is zero.
    #[error("Nothing to withdraw")]
    NothingToWithdraw,

    /// Withdrawal recipient is the zero address.
    #[error("Invalid recipient: zero address")]
    InvalidRecipient,

    /// The value ledger refused the transfer.
    #[error("Transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// An amount computation overflowed.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl RegistryError {
    /// Short stable identifier, used in logs and IPC responses.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "InvalidFormat",
            Self::MustBeSubdomain { .. } => "MustBeSubdomain",
            Self::AlreadyReserved(_) => "AlreadyReserved",
            Self::ParentMissing { .. } => "ParentMissing",
            Self::InsufficientDeposit { .. } => "InsufficientDeposit",
            Self::InsufficientPayment { .. } => "InsufficientPayment",
            Self::BelowMinimum { .. } => "BelowMinimum",
            Self::NotReserved(_) => "NotReserved",
            Self::NotController { .. } => "NotController",
            Self::InvalidController => "InvalidController",
            Self::HasChildren { .. } => "HasChildren",
            Self::Unauthorized { .. } => "Unauthorized",
            Self::NothingToWithdraw => "NothingToWithdraw",
            Self::InvalidRecipient => "InvalidRecipient",
            Self::TransferFailed(_) => "TransferFailed",
            Self::ArithmeticOverflow => "ArithmeticOverflow",
        }
    }
}
