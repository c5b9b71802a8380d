//! Validate-then-execute composition for balance mutations.
//!
//! Every mutation first requires an open account and a numeric amount; each
//! operation then adds its own guards. The first failing check wins and the
//! mutation never runs, so a rejection changes nothing.

use crate::{
    common::{
        error::{AccountError, AmountIssue},
        money::Money,
    },
    domain::account::Account,
};

pub type Guard = fn(&Account, Money) -> Result<(), AccountError>;

pub const DEPOSIT_GUARDS: &[Guard] = &[ensure_positive, ensure_no_overflow];
pub const WITHDRAWAL_GUARDS: &[Guard] = &[ensure_positive, ensure_sufficient_funds];

pub fn guarded<T, F>(
    account: &mut Account,
    amount: Option<Money>,
    guards: &[Guard],
    mutation: F,
) -> Result<T, AccountError>
where
    F: FnOnce(&mut Account, Money) -> T,
{
    if account.is_closed() {
        return Err(AccountError::AccountClosed);
    }
    let amount = amount.ok_or(AccountError::InvalidAmount(AmountIssue::NotNumeric))?;
    for guard in guards {
        guard(account, amount)?;
    }
    Ok(mutation(account, amount))
}

pub fn ensure_positive(_: &Account, amount: Money) -> Result<(), AccountError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount(AmountIssue::NotPositive))
    }
}

pub fn ensure_sufficient_funds(account: &Account, amount: Money) -> Result<(), AccountError> {
    if amount > account.balance() {
        Err(AccountError::InsufficientFunds)
    } else {
        Ok(())
    }
}

pub fn ensure_no_overflow(account: &Account, amount: Money) -> Result<(), AccountError> {
    account
        .balance()
        .checked_add(amount)
        .map(|_| ())
        .ok_or(AccountError::InvalidAmount(AmountIssue::Overflow))
}
