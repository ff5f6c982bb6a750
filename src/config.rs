use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::Level;

use crate::domain::Error;

#[derive(Debug, Parser)]
#[command(name = "bank_account")]
#[command(about = "A single bank account behind a withdrawal limit", long_about = None)]
pub struct Config {
    /// Identifier given to the account
    #[arg(long, default_value = "123456")]
    pub account_id: String,

    /// Largest amount a single withdrawal may take
    #[arg(long, default_value = "500")]
    pub withdrawal_limit: Decimal,

    /// Replay operations from a CSV file (`op,amount`) instead of prompting
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Opening balance in script mode; the interactive session prompts for it
    #[arg(long, requires = "script")]
    pub initial_balance: Option<Decimal>,

    /// Diagnostics level, written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: Level,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.withdrawal_limit < Decimal::ZERO {
            return Err(Error::Config(format!(
                "withdrawal limit must not be negative, got {}",
                self.withdrawal_limit
            )));
        }
        if let Some(balance) = self.initial_balance.filter(|b| *b < Decimal::ZERO) {
            return Err(Error::Config(format!(
                "initial balance must not be negative, got {}",
                balance
            )));
        }
        Ok(())
    }
}
