use std::io::Write;

use crate::{
    common::{error::AppError, money::Money},
    domain::account::Account,
    worker::timing::Timing,
};

pub fn handle<W: Write>(
    acc: &mut Account,
    amount: Option<Money>,
    timing: &Timing,
    out: &mut W,
) -> Result<(), AppError> {
    match timing.measure("withdraw", || acc.withdraw(amount)) {
        Ok(tx) => writeln!(out, "Withdrew {}. Balance: {}", tx.amount, tx.balance_after)?,
        Err(e) => {
            tracing::debug!(account_number = acc.number(), error = %e, "withdrawal rejected");
            writeln!(out, "Withdrawal denied: {e}.")?;
        }
    }
    Ok(())
}
