//! Core entities for the Domain Registry

use nr_01_name_validator::{DomainName, NameKey};
use serde::{Deserialize, Serialize};
use shared_types::{decimal, Address, Amount};

/// A reserved name.
///
/// Exists in the store only while reserved, so `controller` is never zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Canonical name.
    pub name: DomainName,
    /// Principal that controls the name.
    pub controller: Address,
    /// Refundable amount held in escrow.
    #[serde(with = "decimal")]
    pub deposit: Amount,
    /// Number of currently reserved direct children.
    pub child_count: u64,
}

impl Registration {
    /// Fresh registration with no children.
    #[must_use]
    pub fn new(name: DomainName, controller: Address, deposit: Amount) -> Self {
        Self {
            name,
            controller,
            deposit,
            child_count: 0,
        }
    }

    /// Store key of this registration.
    #[must_use]
    pub fn key(&self) -> NameKey {
        self.name.key()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}

/// Which operation a request or outcome refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Reserve,
    ChangeDeposit,
    TransferControl,
    Release,
    WithdrawFunds,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Reserve,
        Operation::ChangeDeposit,
        Operation::TransferControl,
        Operation::Release,
        Operation::WithdrawFunds,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reserve => "reserve",
            Self::ChangeDeposit => "change_deposit",
            Self::TransferControl => "transfer_control",
            Self::Release => "release",
            Self::WithdrawFunds => "withdraw_funds",
        }
    }
}
