use std::io::Read;
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Error, Operation, OperationKind, OperationStream};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    op: String,
    amount: Option<String>,
}

/// Parses an amount the way a user would type it: plain or scientific notation.
pub fn parse_amount(raw: &str) -> Result<Decimal, Error> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| Error::Input(format!("not a number: {:?}", raw)))
}

impl CsvRow {
    fn into_operation(self, row: usize) -> Result<Operation, Error> {
        let amount = self.amount.as_deref().map(parse_amount).transpose()?;

        let kind = match (self.op.to_ascii_lowercase().as_str(), amount) {
            ("deposit", Some(amount)) => OperationKind::Deposit { amount },
            ("withdraw" | "withdrawal", Some(amount)) => OperationKind::Withdraw { amount },
            ("close", None) => OperationKind::Close,
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation on row {}: {}",
                    row, other
                )));
            }
        };

        Ok(Operation { kind, row })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take the reader so the returned stream owns it.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new())),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .enumerate()
            .map(|(index, row_res)| match row_res {
                Ok(row) => row.into_operation(index + 1),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
