use crate::{
    common::{error::AccountError, money::Money},
    domain::{
        guard::{self, DEPOSIT_GUARDS, WITHDRAWAL_GUARDS},
        transaction::{Transaction, TxKind},
    },
};

pub type AccountNumber = u64;

/// A single bank account: balance, history and open/closed state.
///
/// Balance only changes through [`Account::deposit`], [`Account::withdraw`]
/// and [`Account::close`]. Closing is terminal.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    balance: Money,
    transactions: Vec<Transaction>,
    closed: bool,
}

impl Account {
    pub(crate) fn new(number: AccountNumber, balance: Money) -> Self {
        Self {
            number,
            balance,
            transactions: Vec::new(),
            closed: false,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Copy of the history, oldest first.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Credits `amount`. `None` stands for input that was not a number.
    pub fn deposit(&mut self, amount: Option<Money>) -> Result<Transaction, AccountError> {
        guard::guarded(self, amount, DEPOSIT_GUARDS, |acc, amount| {
            acc.balance += amount;
            acc.record(TxKind::Deposit, amount)
        })
    }

    /// Debits `amount` if the balance covers it.
    pub fn withdraw(&mut self, amount: Option<Money>) -> Result<Transaction, AccountError> {
        guard::guarded(self, amount, WITHDRAWAL_GUARDS, |acc, amount| {
            acc.balance -= amount;
            acc.record(TxKind::Withdrawal, amount)
        })
    }

    /// Zeroes the balance, drops the history and marks the account closed.
    /// Safe to call again on a closed account.
    pub fn close(&mut self) {
        self.balance = Money::zero();
        self.transactions.clear();
        self.closed = true;
        tracing::debug!(account_number = self.number, "account closed");
    }

    fn record(&mut self, kind: TxKind, amount: Money) -> Transaction {
        let tx = Transaction::now(kind, amount, self.balance);
        self.transactions.push(tx.clone());
        tx
    }
}
