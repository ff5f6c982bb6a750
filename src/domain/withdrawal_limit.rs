use std::rc::Rc;

use rust_decimal::Decimal;

use crate::domain::{AccountOps, BankingError, Observer};

/// Caps the size of a single withdrawal and forwards everything else to the
/// wrapped account untouched. Wrapping one limit in another stacks them.
#[derive(Debug)]
pub struct WithdrawalLimit<A: AccountOps> {
    inner: A,
    limit: Decimal,
}

impl<A: AccountOps> WithdrawalLimit<A> {
    pub fn new(inner: A, limit: Decimal) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }
}

impl<A: AccountOps> AccountOps for WithdrawalLimit<A> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    fn balance(&self) -> Decimal {
        self.inner.balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError> {
        self.inner.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError> {
        if amount > self.limit {
            tracing::warn!(account = %self.inner.id(), %amount, limit = %self.limit, "withdrawal over limit");
            return Err(BankingError::LimitExceeded {
                limit: self.limit,
                requested: amount,
            });
        }
        self.inner.withdraw(amount)
    }

    fn close(&mut self) -> Result<(), BankingError> {
        self.inner.close()
    }

    fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.inner.add_observer(observer)
    }
}
