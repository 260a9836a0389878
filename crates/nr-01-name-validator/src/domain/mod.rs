//! Domain module for the Name Validator
//!
//! Contains label rules, the validated name type and errors.

pub mod errors;
pub mod labels;
pub mod name;

pub use errors::*;
pub use labels::*;
pub use name::*;
