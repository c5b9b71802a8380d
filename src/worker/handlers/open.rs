use std::io::Write;

use crate::{
    common::{
        error::{AccountError, AppError},
        money::Money,
    },
    domain::{account::Account, factory::AccountFactory},
};

pub fn handle<W: Write>(
    current: &mut Option<Account>,
    factory: &mut AccountFactory,
    initial_balance: Option<Money>,
    out: &mut W,
) -> Result<(), AppError> {
    // only one open account per session; a closed one may be replaced
    if current.as_ref().is_some_and(|acc| !acc.is_closed()) {
        writeln!(out, "An open account already exists.")?;
        return Ok(());
    }

    match factory.open(initial_balance) {
        Ok(account) => {
            writeln!(
                out,
                "Account opened. Number: {}. Balance: {}",
                account.number(),
                account.balance()
            )?;
            *current = Some(account);
        }
        Err(e @ AccountError::InvalidAmount(_)) => {
            tracing::debug!(error = %e, "open rejected");
            writeln!(out, "Invalid amount.")?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "open rejected");
            writeln!(out, "Account could not be opened: {e}.")?;
        }
    }
    Ok(())
}
