//! # NR-01: Name Validator Subsystem
//!
//! Pure, stateless parsing and validation of hierarchical dotted names such
//! as `sub.example.com`.
//!
//! ## Contract
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | `normalize` | Strips a `scheme://` prefix; fails on an empty remainder |
//! | `split_labels` | Splits on `.`; rejects empty labels and characters outside `[A-Za-z0-9-]` |
//! | `parent_of` | Suffix after the first label; `None` for a single label |
//! | `is_valid` | `split_labels` succeeds |
//!
//! Names are treated as case-sensitive ASCII label sequences. No case folding
//! or IDNA mapping is performed, so `Example.com` and `example.com` are
//! different names.
//!
//! Parent existence is not checked here; that needs registry state and is
//! the reservation engine's job.
//!
//! ## Architecture
//!
//! - **Domain**: `DomainName` (validated canonical name), `NameKey`
//!   (Keccak-256 content address), label rules, `NameError`

pub mod domain;

pub use domain::errors::NameError;
pub use domain::labels::{
    is_valid, normalize, parent_of, split_labels, strip_scheme, MAX_LABEL_LENGTH,
    MAX_NAME_LENGTH, SEPARATOR,
};
pub use domain::name::{DomainName, NameKey};
