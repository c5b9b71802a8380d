use crate::common::money::Money;

/// A menu selection read from the console and routed by the session.
///
/// Amounts are `None` when the operator typed something that is not a number;
/// the account still validates them and reports `InvalidAmount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open { initial_balance: Option<Money> },
    Deposit { amount: Option<Money> },
    Withdraw { amount: Option<Money> },
    Balance,
    History,
    Statement,
    Summary,
    Close,
    Status,
    Quit,
    Unknown(String),
}
