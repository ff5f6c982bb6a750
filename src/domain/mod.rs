pub mod account;
pub mod error;
pub mod operation;
pub mod traits;
pub mod withdrawal_limit;

pub use account::Account;
pub use error::{BankingError, Error};
pub use operation::{Operation, OperationKind};
pub use traits::{AccountOps, DeadLetterQueue, Observer, OperationStream};
pub use withdrawal_limit::WithdrawalLimit;
