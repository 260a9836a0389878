//! # Access Control
//!
//! Only a name's controller may change, hand over or release it, and only
//! the treasury admin may withdraw. The admin gets no special rights over
//! names, and a hostile recipient cannot block anyone else.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use nr_02_domain_registry::{DomainRegistryApi, RegistryError, ValueLedger};
    use shared_types::{units, Address, Amount};

    #[test]
    fn test_non_controller_cannot_touch_name() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(2)).unwrap();
        let before = Snapshot::of(&registry);

        for intruder in [bob(), admin(), Address::ZERO] {
            let expected = RegistryError::NotController {
                name: "example.com".into(),
                caller: intruder,
            };
            assert_eq!(registry.release(intruder, "example.com"), Err(expected.clone()));
            assert_eq!(
                registry.transfer_control(intruder, "example.com", intruder),
                Err(expected.clone())
            );
            assert_eq!(
                registry.change_deposit(intruder, "example.com", units(1), Amount::zero()),
                Err(expected)
            );
        }

        assert_eq!(Snapshot::of(&registry), before);
    }

    #[test]
    fn test_deposit_cannot_be_drained_below_minimum() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(2)).unwrap();

        let err = registry
            .change_deposit(alice(), "example.com", Amount::zero(), Amount::zero())
            .unwrap_err();
        assert!(matches!(err, RegistryError::BelowMinimum { .. }));
        assert_eq!(registry.deposit_of("example.com"), units(2));
    }

    #[test]
    fn test_only_admin_withdraws() {
        let mut config = config();
        config.registration_fee = units(1);
        let mut registry = engine_with(config);
        registry.reserve(alice(), "example.com", units(2)).unwrap();

        for caller in [alice(), bob(), Address::ZERO] {
            assert_eq!(
                registry.withdraw_funds(caller, caller),
                Err(RegistryError::Unauthorized { caller })
            );
        }
        assert_eq!(registry.treasury_balance(), units(1));

        registry.withdraw_funds(admin(), admin()).unwrap();
        assert_eq!(registry.ledger().balance_of(&admin()), units(1));
        assert_eq!(
            registry.withdraw_funds(admin(), admin()),
            Err(RegistryError::NothingToWithdraw)
        );
    }

    #[test]
    fn test_hostile_recipient_blocks_only_itself() {
        let mut registry = engine();
        registry.reserve(alice(), "alice.com", units(1)).unwrap();
        registry.reserve(bob(), "bob.com", units(1)).unwrap();
        registry.ledger_mut().reject_payments_to(bob());

        assert!(matches!(
            registry.release(bob(), "bob.com"),
            Err(RegistryError::TransferFailed(_))
        ));
        registry.release(alice(), "alice.com").unwrap();

        assert_eq!(registry.controller_of("bob.com"), bob());
        assert_eq!(registry.total_reserved(), 1);
        assert_consistent(&registry);
    }

    #[test]
    fn test_foreign_child_blocks_release_until_child_released() {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(1)).unwrap();
        registry.reserve(bob(), "ads.example.com", units(1)).unwrap();

        // Alice cannot release while Bob holds the child
        assert!(matches!(
            registry.release(alice(), "example.com"),
            Err(RegistryError::HasChildren { .. })
        ));
        // Alice keeps full control of her own record meanwhile
        registry
            .transfer_control(alice(), "example.com", carol())
            .unwrap();
        registry.release(bob(), "ads.example.com").unwrap();
        registry.release(carol(), "example.com").unwrap();
        assert_eq!(registry.total_reserved(), 0);
    }
}
