use chrono::{Local, NaiveDateTime};

use crate::common::money::Money;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One applied balance change. Never modified after it is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub timestamp: NaiveDateTime,
    pub kind: TxKind,
    pub amount: Money,
    pub balance_after: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "deposit",
            TxKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Transaction {
    pub fn new(
        timestamp: NaiveDateTime,
        kind: TxKind,
        amount: Money,
        balance_after: Money,
    ) -> Self {
        Self {
            timestamp,
            kind,
            amount,
            balance_after,
        }
    }

    /// Stamps the record with the local wall-clock time.
    pub fn now(kind: TxKind, amount: Money, balance_after: Money) -> Self {
        Self::new(Local::now().naive_local(), kind, amount, balance_after)
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn timestamp_renders_to_the_second() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_milli_opt(7, 5, 1, 999))
            .unwrap();
        let tx = Transaction::new(at, TxKind::Deposit, Money::new(100), Money::new(100));

        assert_eq!(tx.formatted_timestamp(), "2024-03-09 07:05:01");
    }

    #[test]
    fn now_produces_a_parseable_timestamp() {
        let tx = Transaction::now(TxKind::Withdrawal, Money::new(1), Money::zero());
        let rendered = tx.formatted_timestamp();

        assert_eq!(rendered.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn kind_names_pad_like_strings() {
        assert_eq!(TxKind::Deposit.to_string(), "deposit");
        assert_eq!(format!("{:<10}|", TxKind::Withdrawal), "withdrawal|");
        assert_eq!(format!("{:<10}|", TxKind::Deposit), "deposit   |");
    }
}
