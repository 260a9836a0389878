//! # Shared Types Crate
//!
//! This crate contains the primitives and event schema shared by every
//! registry subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Principals (`Address`), value amounts
//!   (`Amount`) and `RegistryEvent` are defined once, here.
//! - **Zero Principal**: `Address::ZERO` is the "nobody" principal. A
//!   registration whose controller is zero does not exist.
//! - **Immutable Facts**: Events are emitted only after a transition commits
//!   and are never mutated afterwards.

pub mod entities;
pub mod errors;
pub mod events;

pub use entities::*;
pub use errors::*;
pub use events::*;
