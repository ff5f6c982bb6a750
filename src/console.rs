use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::{Account, AccountOps, Error, Observer, WithdrawalLimit};
use crate::ingestion::parse_amount;

/// The interactive session: a fixed run of prompts against one account.
/// Input is consumed one whitespace-separated token at a time.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Runs the session and reports the first failure on the console.
    /// Only a failure to write that report is returned.
    pub fn run(mut self, config: &Config, observer: Rc<dyn Observer>) -> Result<(), Error> {
        match self.session(config, observer) {
            Ok(()) => {}
            Err(Error::Banking(e)) => writeln!(self.output, "Banking Error: {}", e)?,
            Err(e) => writeln!(self.output, "Something went wrong: {}", e)?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn session(&mut self, config: &Config, observer: Rc<dyn Observer>) -> Result<(), Error> {
        let initial_balance = self.prompt_amount("Enter initial balance:")?;
        let mut account = Account::new(config.account_id.clone(), initial_balance)?;

        writeln!(self.output, "Account Number: {}", account.id())?;
        writeln!(self.output, "Initial Balance: ${}", account.balance())?;

        account.add_observer(observer);
        let mut account = WithdrawalLimit::new(account, config.withdrawal_limit);
        tracing::debug!(account = %account.id(), limit = %account.limit(), "session started");

        let deposit = self.prompt_amount("Enter amount to deposit:")?;
        account.deposit(deposit)?;

        let withdrawal = self.prompt_amount("Enter amount to withdraw:")?;
        account.withdraw(withdrawal)?;

        writeln!(self.output, "Final balance: ${}", account.balance())?;

        let answer = self.prompt("Close account? (yes/no):")?;
        if answer.eq_ignore_ascii_case("yes") {
            account.close()?;
            writeln!(self.output, "Account closed.")?;
        }

        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, Error> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;
        self.next_token()
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Decimal, Error> {
        let token = self.prompt(label)?;
        parse_amount(&token)
    }

    fn next_token(&mut self) -> Result<String, Error> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::Input("unexpected end of input".to_string()));
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        self.pending
            .pop_front()
            .ok_or_else(|| Error::Input("unexpected end of input".to_string()))
    }
}
