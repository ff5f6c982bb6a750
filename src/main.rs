mod config;
mod console;
mod dlq;
mod domain;
mod engine;
mod ingestion;
mod logger;

use std::{fs::File, io, path::Path, rc::Rc};

use clap::Parser;

use crate::config::Config;
use crate::console::Console;
use crate::dlq::DeadLetterLog;
use crate::domain::{Account, AccountOps, Error, WithdrawalLimit};
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::logger::TransactionLogger;

// Single-threaded runtime; it only drives the script ingestion stream.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    match &config.script {
        Some(path) => run_script(path, &config).await?,
        None => {
            let stdin = io::stdin();
            Console::new(stdin.lock(), io::stdout())
                .run(&config, Rc::new(TransactionLogger::stdout()))?;
        }
    }

    Ok(())
}

async fn run_script(path: &Path, config: &Config) -> Result<(), Error> {
    let file = File::open(path)?;
    tracing::info!(path = %path.display(), "replaying script");

    let initial_balance = config.initial_balance.unwrap_or_default();
    let mut account = Account::new(config.account_id.clone(), initial_balance)?;
    account.add_observer(Rc::new(TransactionLogger::stdout()));
    let account = WithdrawalLimit::new(account, config.withdrawal_limit);

    let mut engine = Engine::new(CsvReader::new(file), account, DeadLetterLog::stderr());
    engine.process().await?;
    tracing::info!(rejected = engine.dlq().rejected(), "script replayed");
    engine.flush(io::stdout())
}
