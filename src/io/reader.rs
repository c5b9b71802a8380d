use crate::common::{command::Command, error::AppError, money::Money};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

pub const MENU: &str = "
1 Open a new account
2 Deposit money into your account
3 Withdraw money from your account
4 Balance inquiry
5 Retrieve transaction history
6 Print account statement
7 Print account summary
8 Close account
9 Check if account is closed
0 Quit
Choice: ";

/// Parses operator input as an amount. Anything that is not a number becomes
/// `None` so the account itself can reject it.
pub fn parse_amount(input: &str) -> Option<Money> {
    Money::from_str(input).ok()
}

/// Prompts with the menu and reads one command.
///
/// Open, deposit and withdraw prompt again for their amount. Returns
/// `Ok(None)` once the input is exhausted.
///
/// # Examples
///
/// ```
/// use bank_account::common::{command::Command, money::Money};
/// use bank_account::io::reader::read_command;
///
/// let mut input = "2\n12.50\n".as_bytes();
/// let mut prompts = Vec::new();
/// let cmd = read_command(&mut input, &mut prompts).unwrap();
///
/// assert_eq!(cmd, Some(Command::Deposit { amount: Some(Money::new(1250)) }));
/// ```
pub fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Command>, AppError> {
    let Some(choice) = prompt(input, out, MENU)? else {
        return Ok(None);
    };

    let command = match choice.as_str() {
        "1" => Command::Open {
            initial_balance: read_amount(input, out, "Initial balance (0 if none): ")?,
        },
        "2" => Command::Deposit {
            amount: read_amount(input, out, "Deposit amount: ")?,
        },
        "3" => Command::Withdraw {
            amount: read_amount(input, out, "Withdrawal amount: ")?,
        },
        "4" => Command::Balance,
        "5" => Command::History,
        "6" => Command::Statement,
        "7" => Command::Summary,
        "8" => Command::Close,
        "9" => Command::Status,
        "0" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Ok(Some(command))
}

fn read_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<Money>, AppError> {
    Ok(prompt(input, out, message)?.and_then(|line| parse_amount(&line)))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
