//! Label rules
//!
//! The stateless string contract of the validator. Every function here is
//! total over arbitrary input: attacker-controlled strings produce an error,
//! never a panic.

use super::errors::NameError;

/// Label separator.
pub const SEPARATOR: char = '.';

/// Maximum bytes in a single label (RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum bytes in a full name (RFC 1035, without the root dot).
pub const MAX_NAME_LENGTH: usize = 253;

/// Removes a leading `scheme://` prefix when the prefix is a syntactically
/// valid URI scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`).
///
/// Anything else is returned unchanged and left for `split_labels` to reject.
#[must_use]
pub fn strip_scheme(raw: &str) -> &str {
    let Some((scheme, rest)) = raw.split_once("://") else {
        return raw;
    };

    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if starts_alpha && tail_ok {
        rest
    } else {
        raw
    }
}

/// Strips a recognized scheme prefix and rejects an empty remainder.
pub fn normalize(raw: &str) -> Result<&str, NameError> {
    let name = strip_scheme(raw);
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(name)
}

/// Splits a name into its ordered labels.
///
/// # Errors
/// - `Empty` for an empty string
/// - `NameTooLong` / `LabelTooLong` past the RFC 1035 limits
/// - `EmptyLabel` for leading, trailing or consecutive separators
/// - `InvalidCharacter` for anything outside `[A-Za-z0-9-]`
pub fn split_labels(name: &str) -> Result<Vec<&str>, NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(NameError::NameTooLong {
            length: name.len(),
            max: MAX_NAME_LENGTH,
        });
    }

    let mut labels = Vec::new();
    for (position, label) in name.split(SEPARATOR).enumerate() {
        if label.is_empty() {
            return Err(NameError::EmptyLabel { position });
        }
        if let Some(character) = label.chars().find(|c| !is_label_char(*c)) {
            return Err(NameError::InvalidCharacter {
                character,
                position,
            });
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(NameError::LabelTooLong {
                position,
                length: label.len(),
                max: MAX_LABEL_LENGTH,
            });
        }
        labels.push(label);
    }

    Ok(labels)
}

/// Returns the name with its leftmost label removed, or `None` for a single
/// label. Does not validate.
#[must_use]
pub fn parent_of(name: &str) -> Option<&str> {
    name.split_once(SEPARATOR).map(|(_, parent)| parent)
}

/// True iff `split_labels` succeeds.
#[must_use]
pub fn is_valid(name: &str) -> bool {
    split_labels(name).is_ok()
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
