use std::io::{self, Write};

use crate::domain::{account::Account, transaction::Transaction};

#[derive(serde::Serialize)]
/// Internal CSV output row for the transaction history.
///
/// Headers written (in this order): `timestamp,type,amount,balance_after`.
/// Monetary fields are formatted to 2 decimal places as strings.
struct HistoryRow<'a> {
    timestamp: String,
    #[serde(rename = "type")]
    kind: &'a str,
    amount: String,
    balance_after: String,
}

/// Writes the transaction history as CSV, oldest first.
///
/// An empty history is written as the single line `(no transactions)`
/// instead of a header with no rows.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_account::io::writer::write_history;
///
/// let mut out = Vec::new();
/// write_history(&mut out, &[]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "(no transactions)\n");
/// ```
pub fn write_history<W: Write>(
    mut writer: W,
    transactions: &[Transaction],
) -> Result<(), csv::Error> {
    if transactions.is_empty() {
        writeln!(writer, "(no transactions)")?;
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for tx in transactions {
        let row = HistoryRow {
            timestamp: tx.formatted_timestamp(),
            kind: tx.kind.as_str(),
            amount: tx.amount.to_string_2dp(),
            balance_after: tx.balance_after.to_string_2dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// One statement line: `timestamp | kind | amount: A | balance: B`, numbers
/// right-aligned to ten columns.
pub fn format_transaction_line(tx: &Transaction) -> String {
    format!(
        "{} | {:<10} | amount: {:>10} | balance: {:>10}",
        tx.formatted_timestamp(),
        tx.kind,
        tx.amount,
        tx.balance_after
    )
}

pub fn write_statement<W: Write>(out: &mut W, account: &Account) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== ACCOUNT STATEMENT ===")?;
    writeln!(out, "Account: {}", account.number())?;
    writeln!(out, "-------------------------------")?;
    let transactions = account.transactions();
    if transactions.is_empty() {
        writeln!(out, "(no transactions)")?;
    } else {
        for tx in &transactions {
            writeln!(out, "{}", format_transaction_line(tx))?;
        }
    }
    writeln!(out, "-------------------------------")?;
    writeln!(out, "Current balance: {}", account.balance())?;
    writeln!(out, "===========================")?;
    writeln!(out)
}

pub fn write_summary<W: Write>(out: &mut W, account: &Account) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== ACCOUNT SUMMARY ===")?;
    writeln!(out, "Account number : {}", account.number())?;
    writeln!(out, "Current balance: {}", account.balance())?;
    writeln!(out, "# transactions : {}", account.transaction_count())?;
    writeln!(out, "=======================")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        common::money::Money,
        domain::{factory::AccountFactory, transaction::TxKind},
    };

    fn at_noon() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn transaction_line_aligns_columns() {
        let tx = Transaction::new(at_noon(), TxKind::Deposit, Money::new(5000), Money::new(15_000));

        assert_eq!(
            format_transaction_line(&tx),
            "2024-01-31 12:00:00 | deposit    | amount:      50.00 | balance:     150.00"
        );
    }

    #[test]
    fn history_is_csv_with_header() {
        let txs = vec![
            Transaction::new(at_noon(), TxKind::Deposit, Money::new(5000), Money::new(15_000)),
            Transaction::new(at_noon(), TxKind::Withdrawal, Money::new(15_000), Money::zero()),
        ];

        let mut out = Vec::new();
        write_history(&mut out, &txs).unwrap();
        let s = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(lines[0], "timestamp,type,amount,balance_after");
        assert_eq!(lines[1], "2024-01-31 12:00:00,deposit,50.00,150.00");
        assert_eq!(lines[2], "2024-01-31 12:00:00,withdrawal,150.00,0.00");
    }

    #[test]
    fn statement_of_fresh_account_says_no_transactions() {
        let acc = AccountFactory::new().open(Some(Money::new(10_000))).unwrap();

        let s = render(|out| write_statement(out, &acc));

        assert_eq!(
            s,
            "\n=== ACCOUNT STATEMENT ===\n\
             Account: 1000\n\
             -------------------------------\n\
             (no transactions)\n\
             -------------------------------\n\
             Current balance: 100.00\n\
             ===========================\n\n"
        );
    }

    #[test]
    fn statement_lists_each_transaction() {
        let mut acc = AccountFactory::new().open(Some(Money::new(10_000))).unwrap();
        acc.deposit(Some(Money::new(5000))).unwrap();
        acc.withdraw(Some(Money::new(2550))).unwrap();

        let s = render(|out| write_statement(out, &acc));
        let body: Vec<&str> = s.lines().filter(|l| l.contains(" | ")).collect();

        assert_eq!(body.len(), 2);
        assert!(body[0].ends_with("| deposit    | amount:      50.00 | balance:     150.00"));
        assert!(body[1].ends_with("| withdrawal | amount:      25.50 | balance:     124.50"));
        assert!(s.contains("Current balance: 124.50\n"));
    }

    #[test]
    fn summary_reports_number_balance_and_count() {
        let mut acc = AccountFactory::starting_at(2000)
            .open(Some(Money::zero()))
            .unwrap();
        acc.deposit(Some(Money::new(999))).unwrap();

        let s = render(|out| write_summary(out, &acc));

        assert_eq!(
            s,
            "\n=== ACCOUNT SUMMARY ===\n\
             Account number : 2000\n\
             Current balance: 9.99\n\
             # transactions : 1\n\
             =======================\n\n"
        );
    }
}
