use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spending {
    pub category: String,
    pub spent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancePoint {
    pub timestamp: NaiveDateTime,
    pub balance: Decimal,
}

/// Total withdrawn per category, in the order given.
pub fn spending_by_category(categories: &[Category]) -> Vec<Spending> {
    categories
        .iter()
        .map(|c| Spending {
            category: c.name().to_string(),
            spent: c.spent(),
        })
        .collect()
}

/// Running balance after each transaction, ordered by timestamp.
///
/// Transactions sharing a timestamp keep their ledger order.
pub fn balance_history(category: &Category) -> Vec<BalancePoint> {
    let mut txns: Vec<_> = category.ledger().iter().collect();
    txns.sort_by_key(|t| t.timestamp());

    let mut running = Decimal::ZERO;
    txns.into_iter()
        .map(|t| {
            running = running.saturating_add(t.amount());
            BalancePoint {
                timestamp: t.timestamp(),
                balance: running,
            }
        })
        .collect()
}
