use std::io::Write;

use futures::StreamExt;

use crate::domain::{AccountOps, DeadLetterQueue, Error, Operation, OperationKind, OperationStream};

/// Replays a stream of scripted operations against one account.
#[derive(Debug)]
pub struct Engine<I, A, D>
where
    I: OperationStream,
    A: AccountOps,
    D: DeadLetterQueue,
{
    ingestion: I,
    account: A,
    dlq: D,
}

impl<I, A, D> Engine<I, A, D>
where
    I: OperationStream,
    A: AccountOps,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, account: A, dlq: D) -> Self {
        Self {
            ingestion,
            account,
            dlq,
        }
    }

    pub fn account(&self) -> &A {
        &self.account
    }

    pub fn dlq(&self) -> &D {
        &self.dlq
    }

    /// Applies every operation in order. Failed rows go to the dead-letter
    /// queue and processing carries on.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut ops = self.ingestion.stream();

        while let Some(op) = ops.next().await {
            match op {
                Ok(op) => {
                    if let Err(e) = self.apply_operation(op) {
                        self.dlq.report(&e);
                    }
                }
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        tracing::debug!("applying {}", op);

        let result = match op.kind {
            OperationKind::Deposit { amount } => self.account.deposit(amount),
            OperationKind::Withdraw { amount } => self.account.withdraw(amount),
            OperationKind::Close => self.account.close(),
        };

        result.map_err(|source| Error::Rejected {
            row: op.row,
            kind: op.kind,
            source,
        })
    }

    pub fn flush<W: Write>(&self, mut out: W) -> Result<(), Error> {
        let account = self.account();
        writeln!(out, "account,balance,active")?;
        writeln!(
            out,
            "{},{},{}",
            account.id(),
            account.balance(),
            account.is_active()
        )?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    use rust_decimal::Decimal;

    use super::Engine;
    use crate::domain::testing::RecordingObserver;
    use crate::domain::{
        Account, AccountOps, BankingError, DeadLetterQueue, Error, OperationKind, WithdrawalLimit,
    };
    use crate::ingestion::CsvReader;

    #[derive(Default)]
    struct CollectingDlq {
        reports: Rc<RefCell<Vec<String>>>,
    }

    impl DeadLetterQueue for CollectingDlq {
        fn report(&self, error: &Error) {
            self.reports.borrow_mut().push(error.to_string());
        }
    }

    fn reader(data: &str) -> CsvReader<Cursor<Vec<u8>>> {
        CsvReader::new(Cursor::new(data.as_bytes().to_vec()))
    }

    #[tokio::test]
    async fn replays_script_and_reports_rejections() {
        let mut account = Account::new("123456", Decimal::from(1000)).unwrap();
        let observer = Rc::new(RecordingObserver::default());
        account.add_observer(observer.clone());
        let account = WithdrawalLimit::new(account, Decimal::from(500));

        let dlq = CollectingDlq::default();
        let reports = dlq.reports.clone();

        let mut engine = Engine::new(
            reader(
                "op,amount\n\
                 deposit,200\n\
                 withdraw,300\n\
                 withdraw,600\n\
                 close,\n\
                 deposit,50\n",
            ),
            account,
            dlq,
        );
        engine.process().await.unwrap();

        assert_eq!(engine.account().balance(), Decimal::from(900));
        assert!(!engine.account().is_active());
        assert_eq!(
            *observer.messages.borrow(),
            vec![
                "Deposited $200".to_string(),
                "Withdrew $300".to_string(),
                "Account has been closed.".to_string(),
            ]
        );

        let reports = reports.borrow();
        assert_eq!(reports.len(), 2);
        assert_eq!(
            reports[0],
            Error::Rejected {
                row: 3,
                kind: OperationKind::Withdraw {
                    amount: Decimal::from(600)
                },
                source: BankingError::LimitExceeded {
                    limit: Decimal::from(500),
                    requested: Decimal::from(600),
                },
            }
            .to_string()
        );
        assert!(reports[1].contains("row 5 (deposit 50)"));
        assert!(reports[1].contains("Account is closed. Can't deposit."));
    }

    #[tokio::test]
    async fn overflowing_deposit_is_dead_lettered() {
        let account = Account::new("123456", Decimal::from_scientific("7e28").unwrap()).unwrap();
        let dlq = CollectingDlq::default();
        let reports = dlq.reports.clone();

        let mut engine = Engine::new(
            reader("op,amount
deposit,7e28
deposit,1
"),
            account,
            dlq,
        );
        engine.process().await.unwrap();

        let reports = reports.borrow();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with(
            "Operation on row 1 (deposit 70000000000000000000000000000) rejected"
        ));
        assert!(reports[0].contains("would overflow"));
        assert_eq!(
            engine.account().balance(),
            Decimal::from_scientific("7e28").unwrap() + Decimal::ONE
        );
    }

    #[tokio::test]
    async fn flush_writes_summary() {
        let account = Account::new("acc-9", Decimal::new(1050, 1)).unwrap();
        let mut engine = Engine::new(reader("op,amount\n"), account, CollectingDlq::default());
        engine.process().await.unwrap();

        let mut out = Vec::new();
        engine.flush(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "account,balance,active\nacc-9,105.0,true\n"
        );
    }
}
