use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use crate::domain::Observer;

/// Echoes every account event as a `>> LOG:` line.
#[derive(Debug)]
pub struct TransactionLogger<W: Write> {
    out: RefCell<W>,
}

impl TransactionLogger<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TransactionLogger<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }
}

impl<W: Write> Observer for TransactionLogger<W> {
    fn update(&self, message: &str) {
        tracing::info!(event = message, "account event");
        if let Err(e) = writeln!(self.out.borrow_mut(), ">> LOG: {}", message) {
            tracing::error!(%e, "could not write transaction log");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rust_decimal::Decimal;

    use super::TransactionLogger;
    use crate::domain::{Account, AccountOps};

    #[test]
    fn logs_each_account_event() {
        let logger = Rc::new(TransactionLogger::new(Vec::new()));
        let mut account = Account::new("123456", Decimal::from(100)).unwrap();
        account.add_observer(logger.clone());

        account.deposit(Decimal::new(2550, 2)).unwrap();
        account.withdraw(Decimal::from(5)).unwrap();
        account.close().unwrap();

        assert_eq!(
            String::from_utf8(logger.out.borrow().clone()).unwrap(),
            ">> LOG: Deposited $25.50\n\
             >> LOG: Withdrew $5\n\
             >> LOG: Account has been closed.\n"
        );
    }
}
