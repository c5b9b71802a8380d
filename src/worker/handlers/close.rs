use std::io::Write;

use crate::{common::error::AppError, domain::account::Account};

pub fn handle<W: Write>(acc: &mut Account, out: &mut W) -> Result<(), AppError> {
    if acc.is_closed() {
        writeln!(out, "Account is already closed.")?;
        return Ok(());
    }

    acc.close();
    writeln!(
        out,
        "Account closed. Balance set to 0. Transaction history cleared."
    )?;
    Ok(())
}
