//! # Registry Events
//!
//! Immutable facts emitted after a registry transition commits. External
//! indexers consume these through the shared bus.
//!
//! | Event | Emitted by |
//! |-------|-----------|
//! | `DomainReserved` | `reserve` |
//! | `DepositChanged` | `change_deposit` |
//! | `DomainControlTransferred` | `transfer_control` |
//! | `DomainReleased` | `release` |
//! | `FundsWithdrawn` | `withdraw_funds` |

use crate::entities::{Address, Amount};
use serde::{Deserialize, Serialize};

/// All events produced by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "PascalCase")]
pub enum RegistryEvent {
    /// A name was reserved.
    DomainReserved {
        /// Canonical name.
        name: String,
        /// Principal that now controls the name.
        controller: Address,
        /// Refundable deposit escrowed for the name.
        #[serde(with = "crate::entities::decimal")]
        amount: Amount,
    },

    /// The deposit held for a name was changed by its controller.
    DepositChanged {
        /// Canonical name.
        name: String,
        /// Deposit after the change.
        #[serde(with = "crate::entities::decimal")]
        new_amount: Amount,
    },

    /// Control of a name moved to another principal.
    DomainControlTransferred {
        /// Canonical name.
        name: String,
        /// Principal that now controls the name.
        new_controller: Address,
    },

    /// A name was released and its deposit refunded.
    DomainReleased {
        /// Canonical name.
        name: String,
        /// Controller at the time of release (the refund recipient).
        former_controller: Address,
        /// Amount refunded.
        #[serde(with = "crate::entities::decimal")]
        refunded_amount: Amount,
    },

    /// The treasury balance was withdrawn by the administrator.
    FundsWithdrawn {
        /// Recipient of the withdrawal.
        to: Address,
        /// Amount withdrawn.
        #[serde(with = "crate::entities::decimal")]
        amount: Amount,
    },
}

impl RegistryEvent {
    /// Get the topic for this event.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::DomainReserved { .. } => EventTopic::Reservation,
            Self::DepositChanged { .. } => EventTopic::Deposit,
            Self::DomainControlTransferred { .. } => EventTopic::Control,
            Self::DomainReleased { .. } => EventTopic::Release,
            Self::FundsWithdrawn { .. } => EventTopic::Treasury,
        }
    }

    /// The name this event concerns, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::DomainReserved { name, .. }
            | Self::DepositChanged { name, .. }
            | Self::DomainControlTransferred { name, .. }
            | Self::DomainReleased { name, .. } => Some(name),
            Self::FundsWithdrawn { .. } => None,
        }
    }
}

/// Event topics for filtering subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Name reservations.
    Reservation,
    /// Deposit changes.
    Deposit,
    /// Control transfers.
    Control,
    /// Releases and refunds.
    Release,
    /// Treasury withdrawals.
    Treasury,
    /// All topics (wildcard).
    All,
}
