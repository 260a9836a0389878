//! # Property Tests
//!
//! Random operation sequences against the reservation engine.
