use rust_decimal::Decimal;

use crate::domain::OperationKind;

/// Failures raised by account operations and the policies wrapped around them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankingError {
    #[error("Negative amounts are not allowed: {amount}")]
    NegativeAmount { amount: Decimal },

    #[error("Not enough funds. Balance: ${balance}, requested: ${requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("Account is closed. Can't {action}.")]
    InvalidOperation { action: &'static str },

    #[error("Withdrawal limit is ${limit}, requested: ${requested}")]
    LimitExceeded { limit: Decimal, requested: Decimal },

    #[error("Deposit of ${amount} would overflow the balance of ${balance}")]
    AmountOverflow { balance: Decimal, amount: Decimal },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Banking(#[from] BankingError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Operation on row {row} ({kind}) rejected: {source}")]
    Rejected {
        row: usize,
        kind: OperationKind,
        #[source]
        source: BankingError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
