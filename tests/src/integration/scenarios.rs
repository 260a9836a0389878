//! # Reservation Lifecycle Scenarios
//!
//! End-to-end flows through the reservation engine with a funded in-memory
//! ledger: reserve, re-deposit, hand over, release.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use nr_02_domain_registry::{DomainRegistryApi, RegistryError, TopLevelPolicy, ValueLedger};
    use shared_types::{units, Address, Amount, RegistryEvent};

    // =========================================================================
    // RESERVATION
    // =========================================================================

    #[test]
    fn test_reserve_records_controller_and_deposit() {
        let mut registry = engine();

        registry.reserve(alice(), "example.com", units(3)).unwrap();

        assert_eq!(registry.controller_of("example.com"), alice());
        assert_eq!(registry.deposit_of("example.com"), units(3));
        assert_eq!(registry.total_reserved(), 1);
        assert_eq!(registry.ledger().balance_of(&alice()), units(97));
        assert_eq!(contract_balance(&registry), units(3));
        assert_consistent(&registry);
    }

    #[test]
    fn test_grandchild_needs_parent_chain() {
        let mut registry = engine();

        let err = registry.reserve(alice(), "a.b.c", units(1)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::ParentMissing {
                name: "a.b.c".into(),
                parent: "b.c".into(),
            }
        );

        registry.reserve(alice(), "b.c", units(1)).unwrap();
        registry.reserve(alice(), "a.b.c", units(1)).unwrap();

        assert_eq!(registry.child_count("b.c"), 1);
        assert_eq!(registry.total_reserved(), 2);
        assert_consistent(&registry);
    }

    #[test]
    fn test_children_may_belong_to_other_principals() {
        let mut registry = engine();

        registry.reserve(alice(), "example.com", units(1)).unwrap();
        registry.reserve(bob(), "shop.example.com", units(1)).unwrap();
        registry.reserve(carol(), "blog.example.com", units(1)).unwrap();

        assert_eq!(registry.child_count("example.com"), 2);
        assert_eq!(registry.controller_of("shop.example.com"), bob());

        let err = registry.release(alice(), "example.com").unwrap_err();
        assert!(matches!(err, RegistryError::HasChildren { children: 2, .. }));
    }

    #[test]
    fn test_reservable_policy_allows_top_level() {
        let mut config = config();
        config.top_level_policy = TopLevelPolicy::Reservable;
        let mut registry = engine_with(config);

        let err = registry.reserve(alice(), "example.com", units(1)).unwrap_err();
        assert!(matches!(err, RegistryError::ParentMissing { .. }));

        registry.reserve(alice(), "com", units(1)).unwrap();
        registry.reserve(bob(), "example.com", units(1)).unwrap();
        assert_eq!(registry.child_count("com"), 1);
        assert_consistent(&registry);
    }

    // =========================================================================
    // RELEASE ORDERING
    // =========================================================================

    #[test]
    fn test_release_children_before_parent() {
        let mut registry = engine();
        registry.reserve(alice(), "b.c", units(2)).unwrap();
        registry.reserve(alice(), "a.b.c", units(5)).unwrap();

        let err = registry.release(alice(), "b.c").unwrap_err();
        assert!(matches!(err, RegistryError::HasChildren { .. }));

        registry.release(alice(), "a.b.c").unwrap();
        let before = registry.ledger().balance_of(&alice());
        let event = registry.release(alice(), "b.c").unwrap();

        assert_eq!(
            event,
            RegistryEvent::DomainReleased {
                name: "b.c".into(),
                former_controller: alice(),
                refunded_amount: units(2),
            }
        );
        assert_eq!(registry.ledger().balance_of(&alice()), before + units(2));
        assert_eq!(registry.total_reserved(), 0);
        assert!(contract_balance(&registry).is_zero());
    }

    #[test]
    fn test_business_subdomain_ordering() {
        let mut registry = engine();
        registry.reserve(alice(), "business.com", units(1)).unwrap();
        registry.reserve(alice(), "new.business.com", units(1)).unwrap();

        assert!(matches!(
            registry.release(alice(), "business.com"),
            Err(RegistryError::HasChildren { children: 1, .. })
        ));
        assert_eq!(registry.controller_of("business.com"), alice());

        registry.release(alice(), "new.business.com").unwrap();
        assert_eq!(registry.child_count("business.com"), 0);
        registry.release(alice(), "business.com").unwrap();

        assert_eq!(registry.controller_of("business.com"), Address::ZERO);
        assert_eq!(registry.ledger().balance_of(&alice()), units(100));
        assert_consistent(&registry);
    }

    // =========================================================================
    // CONTROL HANDOVER
    // =========================================================================

    #[test]
    fn test_transfer_then_new_controller_releases() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(1)).unwrap();

        registry
            .transfer_control(alice(), "example.com", bob())
            .unwrap();
        assert_eq!(registry.controller_of("example.com"), bob());

        let bob_before = registry.ledger().balance_of(&bob());
        let event = registry.release(bob(), "example.com").unwrap();

        assert_eq!(
            event,
            RegistryEvent::DomainReleased {
                name: "example.com".into(),
                former_controller: bob(),
                refunded_amount: units(1),
            }
        );
        assert_eq!(registry.controller_of("example.com"), Address::ZERO);
        assert_eq!(registry.ledger().balance_of(&bob()), bob_before + units(1));
        assert_eq!(registry.ledger().balance_of(&alice()), units(99));
    }

    #[test]
    fn test_former_controller_loses_every_right() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(1)).unwrap();
        registry
            .transfer_control(alice(), "example.com", bob())
            .unwrap();

        let not_controller = |result: Result<RegistryEvent, RegistryError>| {
            matches!(result, Err(RegistryError::NotController { .. }))
        };
        assert!(not_controller(registry.release(alice(), "example.com")));
        assert!(not_controller(registry.transfer_control(
            alice(),
            "example.com",
            alice()
        )));
        assert!(not_controller(registry.change_deposit(
            alice(),
            "example.com",
            units(2),
            units(2)
        )));
    }

    // =========================================================================
    // DEPOSIT CHANGES
    // =========================================================================

    #[test]
    fn test_release_refunds_last_recorded_deposit() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(1)).unwrap();
        registry
            .change_deposit(alice(), "example.com", units(4), units(10))
            .unwrap();
        registry
            .change_deposit(alice(), "example.com", units(2), Amount::zero())
            .unwrap();

        // 1 in, 3 more in, 2 back out
        assert_eq!(registry.ledger().balance_of(&alice()), units(98));
        assert_eq!(contract_balance(&registry), units(2));

        let escrow_before = contract_balance(&registry);
        let event = registry.release(alice(), "example.com").unwrap();
        assert!(matches!(
            event,
            RegistryEvent::DomainReleased { refunded_amount, .. } if refunded_amount == units(2)
        ));
        assert_eq!(escrow_before - contract_balance(&registry), units(2));
        assert_eq!(registry.ledger().balance_of(&alice()), units(100));
    }

    #[test]
    fn test_deposit_follows_controller_after_transfer() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(3)).unwrap();
        registry
            .transfer_control(alice(), "example.com", bob())
            .unwrap();

        // Bob lowers the deposit Alice paid and receives the difference
        registry
            .change_deposit(bob(), "example.com", units(1), Amount::zero())
            .unwrap();
        assert_eq!(registry.ledger().balance_of(&bob()), units(102));
        assert_eq!(registry.ledger().balance_of(&alice()), units(97));
        assert_consistent(&registry);
    }

    // =========================================================================
    // TREASURY
    // =========================================================================

    #[test]
    fn test_fees_accumulate_and_withdraw() {
        let mut config = config();
        config.registration_fee = Amount::from(100);
        let mut registry = engine_with(config);
        let payment = units(1) + Amount::from(100);

        registry.reserve(alice(), "a.com", payment).unwrap();
        registry.reserve(bob(), "b.com", payment).unwrap();
        assert_eq!(registry.treasury_balance(), Amount::from(200));
        assert_eq!(registry.deposit_of("a.com"), units(1));
        assert_consistent(&registry);

        let event = registry.withdraw_funds(admin(), carol()).unwrap();
        assert_eq!(
            event,
            RegistryEvent::FundsWithdrawn {
                to: carol(),
                amount: Amount::from(200),
            }
        );
        assert_eq!(
            registry.ledger().balance_of(&carol()),
            units(100) + Amount::from(200)
        );
        assert!(registry.treasury_balance().is_zero());
        assert_eq!(contract_balance(&registry), units(2));

        // Deposits remain fully refundable
        registry.release(alice(), "a.com").unwrap();
        registry.release(bob(), "b.com").unwrap();
        assert!(contract_balance(&registry).is_zero());
        assert_consistent(&registry);
    }
}
