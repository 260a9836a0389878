//! # Hostile Names
//!
//! Names crafted to collide with, shadow or smuggle past a reserved name.
//! All must be rejected as malformed before any value moves.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use nr_01_name_validator::{NameError, MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
    use nr_02_domain_registry::{DomainRegistryApi, RegistryError};
    use shared_types::{units, Address};

    fn assert_malformed(name: &str) {
        let mut registry = engine();
        let before = Snapshot::of(&registry);

        let err = registry.reserve(alice(), name, units(1)).unwrap_err();
        assert!(
            matches!(err, RegistryError::InvalidFormat(_)),
            "{name:?} accepted or misclassified: {err:?}"
        );
        assert_eq!(Snapshot::of(&registry), before);
        assert_eq!(registry.controller_of(name), Address::ZERO);
    }

    #[test]
    fn test_homoglyph_names_rejected() {
        // Cyrillic 'а' and Greek 'ο'
        assert_malformed("ex\u{0430}mple.com");
        assert_malformed("g\u{03BF}\u{03BF}gle.com");
        assert_malformed("example.c\u{043E}m");
    }

    #[test]
    fn test_invisible_and_control_characters_rejected() {
        assert_malformed("example.com\0");
        assert_malformed("exam\u{200B}ple.com");
        assert_malformed("example.com\n");
        assert_malformed("\texample.com");
        assert_malformed(" example.com");
    }

    #[test]
    fn test_separator_tricks_rejected() {
        assert_malformed("example.com.");
        assert_malformed(".example.com");
        assert_malformed("sub..example.com");
        assert_malformed("example\u{3002}com");
    }

    #[test]
    fn test_url_smuggling_rejected() {
        assert_malformed("https://https://example.com");
        assert_malformed("javascript:alert(1).com");
        assert_malformed("user@example.com");
        assert_malformed("example.com/path");
        assert_malformed("example.com:8080");
        assert_malformed("https://");
    }

    #[test]
    fn test_oversized_names_rejected() {
        let long_label = format!("{}.com", "a".repeat(MAX_LABEL_LENGTH + 1));
        let mut registry = engine();
        assert_eq!(
            registry.reserve(alice(), &long_label, units(1)),
            Err(RegistryError::InvalidFormat(NameError::LabelTooLong {
                position: 0,
                length: MAX_LABEL_LENGTH + 1,
                max: MAX_LABEL_LENGTH,
            }))
        );

        let label = "a".repeat(MAX_LABEL_LENGTH);
        let long_name = vec![label.as_str(); 4].join(".");
        assert!(long_name.len() > MAX_NAME_LENGTH);
        assert_malformed(&long_name);

        let huge = "x".repeat(1 << 20);
        assert_malformed(&huge);
    }

    #[test]
    fn test_limits_are_inclusive() {
        let mut registry = engine();
        let label = "a".repeat(MAX_LABEL_LENGTH);
        let name = format!("{label}.com");
        registry.reserve(alice(), &name, units(1)).unwrap();
        assert_eq!(registry.controller_of(&name), alice());
    }

    #[test]
    fn test_scheme_prefix_cannot_shadow_reserved_name() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(1)).unwrap();

        assert_eq!(
            registry.reserve(bob(), "https://example.com", units(1)),
            Err(RegistryError::AlreadyReserved("example.com".into()))
        );
        assert_eq!(registry.controller_of("ftp://example.com"), alice());
    }

    #[test]
    fn test_case_variant_is_a_distinct_name() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(1)).unwrap();
        registry.reserve(bob(), "EXAMPLE.com", units(1)).unwrap();

        assert_eq!(registry.controller_of("example.com"), alice());
        assert_eq!(registry.controller_of("EXAMPLE.com"), bob());

        // A case variant of the parent does not satisfy the hierarchy
        assert!(matches!(
            registry.reserve(carol(), "sub.Example.com", units(1)),
            Err(RegistryError::ParentMissing { .. })
        ));
    }
}
