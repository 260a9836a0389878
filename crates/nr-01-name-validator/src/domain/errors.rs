//! Error types for name validation

use thiserror::Error;

/// Every way a raw name can fail validation.
///
/// The reservation engine surfaces all of these as `InvalidFormat`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Nothing left after stripping the scheme prefix.
    #[error("Name is empty")]
    Empty,

    /// Leading, trailing or consecutive separators.
    #[error("Empty label at position {position}")]
    EmptyLabel { position: usize },

    /// A character outside letters, digits and hyphen.
    #[error("Invalid character {character:?} in label {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A label longer than the DNS limit.
    #[error("Label {position} too long: {length} > {max} bytes")]
    LabelTooLong {
        position: usize,
        length: usize,
        max: usize,
    },

    /// A name longer than the DNS limit.
    #[error("Name too long: {length} > {max} bytes")]
    NameTooLong { length: usize, max: usize },
}
