use std::fmt;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ledger entry. Deposits are positive, withdrawals negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    amount: Decimal,
    description: String,
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Stamp the entry with the current local time.
    pub fn new(amount: Decimal, description: impl Into<String>) -> Self {
        Self::at(amount, description, Local::now().naive_local())
    }

    pub fn at(amount: Decimal, description: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            amount,
            description: description.into(),
            timestamp,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_withdrawal() { '-' } else { '+' };
        write!(
            f,
            "{} | {}{:.2} | {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            sign,
            self.amount.abs(),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_display_deposit() {
        let txn = Transaction::at(dec!(500), "Paycheck", noon());
        assert_eq!(txn.to_string(), "2025-08-18 12:00 | +500.00 | Paycheck");
    }

    #[test]
    fn test_display_withdrawal() {
        let txn = Transaction::at(dec!(-120.5), "Groceries", noon());
        assert_eq!(txn.to_string(), "2025-08-18 12:00 | -120.50 | Groceries");
        assert!(txn.is_withdrawal());
    }

    #[test]
    fn test_zero_is_not_withdrawal() {
        let txn = Transaction::at(Decimal::ZERO, "", noon());
        assert!(!txn.is_withdrawal());
        assert_eq!(txn.to_string(), "2025-08-18 12:00 | +0.00 | ");
    }

    #[test]
    fn test_new_uses_current_time() {
        let before = Local::now().naive_local();
        let txn = Transaction::new(dec!(1), "now");
        assert!(txn.timestamp() >= before);
    }
}
