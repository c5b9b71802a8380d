//! Read-only commands. All of them work on a closed account too.

use std::io::Write;

use crate::{
    common::error::AppError,
    domain::account::Account,
    io::writer,
};

pub fn balance<W: Write>(acc: &Account, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "Current balance: {}", acc.balance())?;
    Ok(())
}

pub fn history<W: Write>(acc: &Account, out: &mut W) -> Result<(), AppError> {
    writer::write_history(&mut *out, &acc.transactions())?;
    Ok(())
}

pub fn statement<W: Write>(acc: &Account, out: &mut W) -> Result<(), AppError> {
    writer::write_statement(out, acc)?;
    Ok(())
}

pub fn summary<W: Write>(acc: &Account, out: &mut W) -> Result<(), AppError> {
    writer::write_summary(out, acc)?;
    Ok(())
}

pub fn status<W: Write>(acc: &Account, out: &mut W) -> Result<(), AppError> {
    if acc.is_closed() {
        writeln!(out, "Account is closed.")?;
    } else {
        writeln!(out, "Account is open.")?;
    }
    Ok(())
}
