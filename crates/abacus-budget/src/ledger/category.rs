use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::Transaction;
use crate::error::BudgetError;

const LEDGER_WIDTH: usize = 40;

/// A named budget category such as Food or Clothing.
///
/// The balance is always derived from the ledger, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    /// Rebuild a category from previously recorded transactions.
    pub fn from_transactions(name: impl Into<String>, ledger: Vec<Transaction>) -> Self {
        Self {
            name: name.into(),
            ledger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn deposit(&mut self, amount: Decimal, description: &str) -> Result<(), BudgetError> {
        ensure_non_negative(amount)?;
        ensure_fits(self, amount)?;
        self.ledger.push(Transaction::new(amount, description));
        Ok(())
    }

    /// Record a withdrawal if the balance covers it. Returns whether it was recorded.
    pub fn withdraw(&mut self, amount: Decimal, description: &str) -> Result<bool, BudgetError> {
        ensure_non_negative(amount)?;
        if !self.check_funds(amount) {
            tracing::debug!(category = %self.name, %amount, "withdrawal declined");
            return Ok(false);
        }
        self.ledger.push(Transaction::new(-amount, description));
        Ok(true)
    }

    /// Move `amount` into `other`, recording both sides. Returns whether it happened.
    pub fn transfer(&mut self, amount: Decimal, other: &mut Category) -> Result<bool, BudgetError> {
        ensure_non_negative(amount)?;
        if !self.check_funds(amount) {
            tracing::debug!(from = %self.name, to = %other.name, %amount, "transfer declined");
            return Ok(false);
        }
        ensure_fits(other, amount)?;
        self.ledger.push(Transaction::new(
            -amount,
            format!("Transfer to {}", other.name),
        ));
        other.ledger.push(Transaction::new(
            amount,
            format!("Transfer from {}", self.name),
        ));
        Ok(true)
    }

    pub fn balance(&self) -> Decimal {
        self.ledger
            .iter()
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount()))
    }

    pub fn check_funds(&self, amount: Decimal) -> bool {
        self.balance() >= amount
    }

    /// Sum of withdrawal magnitudes, transfers out included.
    pub fn spent(&self) -> Decimal {
        self.ledger
            .iter()
            .filter(|t| t.is_withdrawal())
            .fold(Decimal::ZERO, |acc, t| acc.saturating_sub(t.amount()))
    }
}

fn ensure_non_negative(amount: Decimal) -> Result<(), BudgetError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BudgetError::NegativeAmount(amount));
    }
    Ok(())
}

fn ensure_fits(category: &Category, amount: Decimal) -> Result<(), BudgetError> {
    match category.balance().checked_add(amount) {
        Some(_) => Ok(()),
        None => Err(BudgetError::AmountOverflow(category.name.clone())),
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("{} Ledger", self.name);
        writeln!(f, "{header:=^width$}", width = LEDGER_WIDTH)?;
        let body: Vec<String> = self.ledger.iter().map(Transaction::to_string).collect();
        writeln!(f, "{}", body.join("\n"))?;
        writeln!(f, "{}", "-".repeat(LEDGER_WIDTH))?;
        write!(f, "Balance: {:.2}", self.balance())
    }
}
