use std::rc::Rc;

use rust_decimal::Decimal;

use crate::domain::{AccountOps, BankingError, Observer};

pub struct Account {
    id: String,
    balance: Decimal,
    active: bool, // flips to false once, on close
    observers: Vec<Rc<dyn Observer>>,
}

impl Account {
    /// Opens an active account. A negative opening balance is rejected the
    /// same way a negative deposit is.
    pub fn new(id: impl Into<String>, initial_balance: Decimal) -> Result<Self, BankingError> {
        if initial_balance < Decimal::ZERO {
            return Err(BankingError::NegativeAmount {
                amount: initial_balance,
            });
        }

        Ok(Self {
            id: id.into(),
            balance: initial_balance,
            active: true,
            observers: Vec::new(),
        })
    }

    /// Calls every observer in registration order.
    pub fn notify_observers(&self, message: &str) {
        for observer in &self.observers {
            observer.update(message);
        }
    }

    fn ensure_active(&self, action: &'static str) -> Result<(), BankingError> {
        if !self.active {
            tracing::warn!(account = %self.id, action, "operation on closed account");
            return Err(BankingError::InvalidOperation { action });
        }
        Ok(())
    }
}

impl AccountOps for Account {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError> {
        self.ensure_active("deposit")?;

        if amount < Decimal::ZERO {
            return Err(BankingError::NegativeAmount { amount });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankingError::AmountOverflow {
                balance: self.balance,
                amount,
            })?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "deposit applied");
        self.notify_observers(&format!("Deposited ${}", amount));
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError> {
        self.ensure_active("withdraw")?;

        if amount < Decimal::ZERO {
            return Err(BankingError::NegativeAmount { amount });
        }
        if amount > self.balance {
            return Err(BankingError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "withdrawal applied");
        self.notify_observers(&format!("Withdrew ${}", amount));
        Ok(())
    }

    fn close(&mut self) -> Result<(), BankingError> {
        self.ensure_active("close")?;

        self.active = false;
        tracing::debug!(account = %self.id, "account closed");
        self.notify_observers("Account has been closed.");
        Ok(())
    }

    fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }
}

impl core::fmt::Debug for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("balance", &self.balance)
            .field("active", &self.active)
            .field("observers", &self.observers.len())
            .finish()
    }
}
