//! # IPC Message Payloads
//!
//! Request/response types for hosts that drive the registry through
//! messages rather than direct calls. Amounts travel as decimal strings.

use crate::domain::entities::Operation;
use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::{decimal, Address, Amount, RegistryEvent};
use uuid::Uuid;

/// A registry operation, minus the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RegistryRequest {
    Reserve {
        name: String,
        #[serde(with = "decimal")]
        payment: Amount,
    },
    ChangeDeposit {
        name: String,
        #[serde(with = "decimal")]
        new_amount: Amount,
        #[serde(with = "decimal")]
        supplied_value: Amount,
    },
    TransferControl {
        name: String,
        new_controller: Address,
    },
    Release {
        name: String,
    },
    WithdrawFunds {
        to: Address,
    },
}

impl RegistryRequest {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Reserve { .. } => Operation::Reserve,
            Self::ChangeDeposit { .. } => Operation::ChangeDeposit,
            Self::TransferControl { .. } => Operation::TransferControl,
            Self::Release { .. } => Operation::Release,
            Self::WithdrawFunds { .. } => Operation::WithdrawFunds,
        }
    }
}

/// A request plus the identity the host vouches for.
///
/// The registry trusts `caller` as given; authenticating it is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
    /// Principal performing the operation.
    pub caller: Address,
    /// The operation.
    pub request: RegistryRequest,
}

impl RequestEnvelope {
    /// Wraps `request` with a fresh correlation ID.
    #[must_use]
    pub fn new(caller: Address, request: RegistryRequest) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            caller,
            request,
        }
    }
}

/// Outcome of a [`RequestEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryResponse {
    /// Correlation ID matching the request.
    pub correlation_id: Uuid,
    /// Operation that was attempted.
    pub operation: Operation,
    /// Whether the operation committed.
    pub accepted: bool,
    /// The committed event, if accepted.
    pub event: Option<RegistryEvent>,
    /// Stable error identifier (`RegistryError::kind`), if rejected.
    pub error_kind: Option<String>,
    /// Human-readable error, if rejected.
    pub error: Option<String>,
}

impl RegistryResponse {
    #[must_use]
    pub fn accepted(correlation_id: Uuid, operation: Operation, event: RegistryEvent) -> Self {
        Self {
            correlation_id,
            operation,
            accepted: true,
            event: Some(event),
            error_kind: None,
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(correlation_id: Uuid, operation: Operation, error: &RegistryError) -> Self {
        Self {
            correlation_id,
            operation,
            accepted: false,
            event: None,
            error_kind: Some(error.kind().to_string()),
            error: Some(error.to_string()),
        }
    }
}
