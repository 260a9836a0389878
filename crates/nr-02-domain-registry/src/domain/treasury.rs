//! Treasury: the non-refundable balance and who may withdraw it.

use super::errors::RegistryError;
use shared_types::{Address, Amount};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Treasury {
    admin: Address,
    balance: Amount,
}

impl Treasury {
    #[must_use]
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            balance: Amount::zero(),
        }
    }

    #[must_use]
    pub fn admin(&self) -> Address {
        self.admin
    }

    #[must_use]
    pub fn balance(&self) -> Amount {
        self.balance
    }

    #[must_use]
    pub fn is_admin(&self, caller: &Address) -> bool {
        *caller == self.admin
    }

    /// Balance after crediting `fee`, without applying it.
    pub(crate) fn balance_with(&self, fee: Amount) -> Result<Amount, RegistryError> {
        self.balance
            .checked_add(fee)
            .ok_or(RegistryError::ArithmeticOverflow)
    }

    /// Commits a balance computed by `balance_with`.
    pub(crate) fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }

    /// Empties the treasury, returning what it held.
    pub(crate) fn drain(&mut self) -> Amount {
        std::mem::replace(&mut self.balance, Amount::zero())
    }
}
