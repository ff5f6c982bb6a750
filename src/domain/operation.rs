use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Close,
}

/// One scripted operation, tagged with its 1-based data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub row: usize,
}

impl core::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OperationKind::Deposit { amount } => write!(f, "deposit {}", amount),
            OperationKind::Withdraw { amount } => write!(f, "withdraw {}", amount),
            OperationKind::Close => write!(f, "close"),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (row {})", self.kind, self.row)
    }
}
