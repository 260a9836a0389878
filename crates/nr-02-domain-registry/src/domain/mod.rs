//! Domain layer for the Domain Registry
//!
//! Store, treasury, reservation engine and the invariants they uphold.

pub mod engine;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod store;
pub mod treasury;

pub use engine::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use store::*;
pub use treasury::*;
