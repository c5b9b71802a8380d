use crate::{
    common::{
        error::{AccountError, AmountIssue},
        money::Money,
    },
    domain::account::{Account, AccountNumber},
};

pub const FIRST_ACCOUNT_NUMBER: AccountNumber = 1000;

/// Opens accounts and hands out their numbers.
///
/// Numbers are strictly increasing for the lifetime of the factory and are
/// only consumed by a successful open. Once `AccountNumber::MAX` has been
/// handed out the factory refuses further opens.
#[derive(Debug)]
pub struct AccountFactory {
    next_number: Option<AccountNumber>,
}

impl Default for AccountFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountFactory {
    pub fn new() -> Self {
        Self::starting_at(FIRST_ACCOUNT_NUMBER)
    }

    pub fn starting_at(first: AccountNumber) -> Self {
        Self {
            next_number: Some(first),
        }
    }

    pub fn open(&mut self, initial_balance: Option<Money>) -> Result<Account, AccountError> {
        let balance =
            initial_balance.ok_or(AccountError::InvalidAmount(AmountIssue::NotNumeric))?;
        if balance.is_negative() {
            return Err(AccountError::InvalidAmount(AmountIssue::Negative));
        }

        let number = self.next_number.ok_or(AccountError::NumbersExhausted)?;
        self.next_number = number.checked_add(1);
        tracing::debug!(account_number = number, balance = %balance, "account opened");
        Ok(Account::new(number, balance))
    }
}
