//! # Inbound Port - DomainRegistryApi
//!
//! Primary driving port exposing the registry state machine.
//!
//! Every mutating call takes the caller's principal as supplied by the host,
//! returns the single event describing what committed, and on error leaves
//! all state untouched.

use crate::domain::errors::RegistryError;
use shared_types::{Address, Amount, RegistryEvent};

/// Primary API for the Domain Registry subsystem.
///
/// # Example
///
/// ```rust,ignore
/// use nr_02_domain_registry::ports::DomainRegistryApi;
///
/// fn example(registry: &mut impl DomainRegistryApi, alice: Address) {
///     registry.reserve(alice, "example.com", units(1))?;
///     registry.reserve(alice, "sub.example.com", units(1))?;
///
///     // Parent cannot go while the child is reserved
///     assert!(registry.release(alice, "example.com").is_err());
/// }
/// ```
pub trait DomainRegistryApi: Send + Sync {
    /// Reserves an unreserved name for `caller`, paying `payment` into escrow.
    ///
    /// # Errors
    /// - `InvalidFormat`: name failed validation
    /// - `MustBeSubdomain`: top-level policy forbids a name this shallow
    /// - `AlreadyReserved`: name has a controller
    /// - `ParentMissing`: registry parent not reserved
    /// - `InvalidController`: caller is the zero address
    /// - `InsufficientDeposit`: payment below minimum plus fee
    /// - `TransferFailed`: caller could not pay
    fn reserve(
        &mut self,
        caller: Address,
        name: &str,
        payment: Amount,
    ) -> Result<RegistryEvent, RegistryError>;

    /// Sets the deposit held for a name to `new_amount`.
    ///
    /// An increase pulls exactly the difference from the caller and needs
    /// `supplied_value` to cover it. A decrease refunds the difference.
    ///
    /// # Errors
    /// - `InvalidFormat`, `NotReserved`, `NotController`
    /// - `BelowMinimum`: `new_amount` under the minimum deposit
    /// - `InsufficientPayment`: `supplied_value` under the increase
    /// - `TransferFailed`
    fn change_deposit(
        &mut self,
        caller: Address,
        name: &str,
        new_amount: Amount,
        supplied_value: Amount,
    ) -> Result<RegistryEvent, RegistryError>;

    /// Hands control of a name to `new_controller`. The deposit stays.
    ///
    /// # Errors
    /// - `InvalidFormat`, `NotReserved`, `NotController`
    /// - `InvalidController`: `new_controller` is zero
    fn transfer_control(
        &mut self,
        caller: Address,
        name: &str,
        new_controller: Address,
    ) -> Result<RegistryEvent, RegistryError>;

    /// Releases a childless name and refunds its deposit to the controller.
    ///
    /// # Errors
    /// - `InvalidFormat`, `NotReserved`, `NotController`
    /// - `HasChildren`: a direct child is still reserved
    /// - `TransferFailed`: refund refused
    fn release(&mut self, caller: Address, name: &str) -> Result<RegistryEvent, RegistryError>;

    /// Pays the whole treasury balance to `to`. Admin only.
    ///
    /// # Errors
    /// - `Unauthorized`, `InvalidRecipient`, `NothingToWithdraw`, `TransferFailed`
    fn withdraw_funds(&mut self, caller: Address, to: Address)
        -> Result<RegistryEvent, RegistryError>;

    /// Controller of a name, or zero if unreserved or invalid.
    fn controller_of(&self, name: &str) -> Address;

    /// Deposit held for a name, or zero if unreserved or invalid.
    fn deposit_of(&self, name: &str) -> Amount;

    /// Number of reserved names.
    fn total_reserved(&self) -> usize;
}
