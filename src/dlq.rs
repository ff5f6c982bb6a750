use std::cell::{Cell, RefCell};
use std::io::{self, Stderr, Write};

use crate::domain::{DeadLetterQueue, Error};

/// Writes one line per script row that could not be applied and counts them.
#[derive(Debug)]
pub struct DeadLetterLog<W: Write> {
    out: RefCell<W>,
    rejected: Cell<usize>,
}

impl DeadLetterLog<Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> DeadLetterLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            rejected: Cell::new(0),
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejected.get()
    }
}

impl<W: Write> DeadLetterQueue for DeadLetterLog<W> {
    fn report(&self, error: &Error) {
        self.rejected.set(self.rejected.get() + 1);
        tracing::warn!(%error, "operation dead-lettered");

        let mut out = self.out.borrow_mut();
        let written = match error {
            Error::Rejected { row, kind, source } => {
                writeln!(out, "Rejected row {} ({}): {}", row, kind, source)
            }
            Error::Ingestion(reason) => writeln!(out, "Skipped unreadable row: {}", reason),
            other => writeln!(out, "Dead-lettered: {}", other),
        };
        if let Err(e) = written {
            tracing::error!(%e, "could not write dead-letter entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::DeadLetterLog;
    use crate::domain::{BankingError, DeadLetterQueue, Error, OperationKind};

    #[test]
    fn names_row_and_operation() {
        let dlq = DeadLetterLog::new(Vec::new());

        dlq.report(&Error::Rejected {
            row: 4,
            kind: OperationKind::Withdraw {
                amount: Decimal::from(600),
            },
            source: BankingError::LimitExceeded {
                limit: Decimal::from(500),
                requested: Decimal::from(600),
            },
        });
        dlq.report(&Error::Ingestion("Invalid operation on row 5: transfer".to_string()));
        dlq.report(&Error::Input("not a number: \"x\"".to_string()));

        assert_eq!(dlq.rejected(), 3);
        assert_eq!(
            String::from_utf8(dlq.out.borrow().clone()).unwrap(),
            "Rejected row 4 (withdraw 600): Withdrawal limit is $500, requested: $600\n\
             Skipped unreadable row: Invalid operation on row 5: transfer\n\
             Dead-lettered: Invalid input: not a number: \"x\"\n"
        );
    }
}
