use std::rc::Rc;

use futures::Stream;
use rust_decimal::Decimal;

use crate::domain::{BankingError, Error, Operation};

/// Sink notified after every state change of an account.
pub trait Observer {
    fn update(&self, message: &str);
}

/// The capability shared by accounts and everything that wraps them.
pub trait AccountOps {
    fn id(&self) -> &str;
    fn is_active(&self) -> bool;
    fn balance(&self) -> Decimal;

    fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError>;
    fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError>;
    fn close(&mut self) -> Result<(), BankingError>;

    fn add_observer(&mut self, observer: Rc<dyn Observer>);
}

impl<T: AccountOps + ?Sized> AccountOps for &mut T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn balance(&self) -> Decimal {
        (**self).balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError> {
        (**self).deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError> {
        (**self).withdraw(amount)
    }

    fn close(&mut self) -> Result<(), BankingError> {
        (**self).close()
    }

    fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        (**self).add_observer(observer)
    }
}

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}
