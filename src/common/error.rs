/// Why an amount was refused before it could touch a balance.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIssue {
    #[error("amount must be numeric")]
    NotNumeric,
    #[error("amount must be positive")]
    NotPositive,
    #[error("amount must not be negative")]
    Negative,
    #[error("amount is too large")]
    Overflow,
}

/// Recoverable rejections of an account operation. A rejected operation
/// leaves the account exactly as it was.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("{0}")]
    InvalidAmount(AmountIssue),
    #[error("account is closed")]
    AccountClosed,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("no account numbers left")]
    NumbersExhausted,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Cli(#[from] clap::Error),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
