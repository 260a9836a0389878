//! # All-or-Nothing Transitions
//!
//! Every rejected operation, whether it fails a check or the ledger refuses
//! the transfer, must leave store, treasury and ledger exactly as they were.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use nr_02_domain_registry::{
        DomainRegistryApi, InMemoryLedger, RegistryError, ReservationEngine, TransferError,
    };
    use shared_types::{units, Address, Amount};

    /// Alice holds `example.com` (2 units) and `sub.example.com` (1 unit).
    fn populated() -> ReservationEngine<InMemoryLedger> {
        let mut registry = engine();
        registry.reserve(alice(), "example.com", units(2)).unwrap();
        registry
            .reserve(alice(), "sub.example.com", units(1))
            .unwrap();
        registry
    }

    fn assert_rejected_without_effect<F>(registry: &mut ReservationEngine<InMemoryLedger>, op: F)
    where
        F: FnOnce(&mut ReservationEngine<InMemoryLedger>) -> Result<(), RegistryError>,
    {
        let before = Snapshot::of(&*registry);
        assert!(op(&mut *registry).is_err());
        assert_eq!(Snapshot::of(&*registry), before);
        assert_consistent(&*registry);
    }

    // =========================================================================
    // CHECK FAILURES
    // =========================================================================

    #[test]
    fn test_reserve_rejections_are_side_effect_free() {
        let mut registry = populated();
        let attempts: Vec<(Address, &str, Amount)> = vec![
            (bob(), "example.com", units(1)),
            (bob(), "x.y.example.org", units(1)),
            (bob(), "com", units(1)),
            (bob(), "bad name.com", units(1)),
            (bob(), "other.com", units(1) - Amount::one()),
            (Address::ZERO, "other.com", units(1)),
            (bob(), "other.com", units(101)),
        ];

        for (caller, name, payment) in attempts {
            assert_rejected_without_effect(&mut registry, |r| {
                r.reserve(caller, name, payment).map(|_| ())
            });
        }
    }

    #[test]
    fn test_controller_operation_rejections_are_side_effect_free() {
        let mut registry = populated();

        assert_rejected_without_effect(&mut registry, |r| {
            r.release(alice(), "example.com").map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.release(bob(), "sub.example.com").map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.release(alice(), "missing.com").map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.transfer_control(alice(), "example.com", Address::ZERO)
                .map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.change_deposit(alice(), "example.com", Amount::one(), Amount::zero())
                .map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.change_deposit(alice(), "example.com", units(5), units(2))
                .map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.change_deposit(alice(), "example.com", units(500), units(500))
                .map(|_| ())
        });
    }

    #[test]
    fn test_treasury_rejections_are_side_effect_free() {
        let mut registry = populated();

        assert_rejected_without_effect(&mut registry, |r| {
            r.withdraw_funds(alice(), alice()).map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.withdraw_funds(admin(), Address::ZERO).map(|_| ())
        });
        assert_rejected_without_effect(&mut registry, |r| {
            r.withdraw_funds(admin(), admin()).map(|_| ())
        });
    }

    // =========================================================================
    // LEDGER FAILURES
    // =========================================================================

    #[test]
    fn test_refused_refund_keeps_registration() {
        let mut registry = populated();
        registry
            .transfer_control(alice(), "sub.example.com", bob())
            .unwrap();
        registry.ledger_mut().reject_payments_to(bob());

        let before = Snapshot::of(&registry);
        let err = registry.release(bob(), "sub.example.com").unwrap_err();
        assert_eq!(
            err,
            RegistryError::TransferFailed(TransferError::Rejected { account: bob() })
        );
        assert_eq!(Snapshot::of(&registry), before);
        assert_eq!(registry.controller_of("sub.example.com"), bob());
        assert_eq!(registry.child_count("example.com"), 1);

        registry.ledger_mut().accept_payments_to(&bob());
        registry.release(bob(), "sub.example.com").unwrap();
        assert_eq!(registry.child_count("example.com"), 0);
        assert_consistent(&registry);
    }

    #[test]
    fn test_refused_partial_refund_keeps_deposit() {
        let mut registry = populated();
        registry.ledger_mut().reject_payments_to(alice());

        let before = Snapshot::of(&registry);
        let err = registry
            .change_deposit(alice(), "example.com", units(1), Amount::zero())
            .unwrap_err();
        assert!(matches!(err, RegistryError::TransferFailed(_)));
        assert_eq!(Snapshot::of(&registry), before);
        assert_eq!(registry.deposit_of("example.com"), units(2));
    }

    #[test]
    fn test_refused_withdrawal_keeps_treasury() {
        let mut config = config();
        config.registration_fee = units(1);
        let mut registry = engine_with(config);
        registry.reserve(alice(), "example.com", units(2)).unwrap();
        registry.ledger_mut().reject_payments_to(carol());

        let before = Snapshot::of(&registry);
        assert!(registry.withdraw_funds(admin(), carol()).is_err());
        assert_eq!(Snapshot::of(&registry), before);
        assert_eq!(registry.treasury_balance(), units(1));
    }
}
