//! # Error Types
//!
//! Defines error types shared across subsystems.

use thiserror::Error;

/// Errors from parsing a textual principal address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAddressError {
    /// Address did not contain exactly 40 hex digits.
    #[error("Invalid address length: expected 40 hex digits, got {0}")]
    InvalidLength(usize),

    /// Address contained non-hex characters.
    #[error("Invalid address hex: {0}")]
    InvalidHex(String),
}

/// Errors from parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    /// Input was empty or whitespace.
    #[error("Amount is empty")]
    Empty,

    /// Input was not a base-10 integer that fits in 256 bits.
    #[error("Invalid amount {input:?}: {reason}")]
    Invalid { input: String, reason: String },
}
