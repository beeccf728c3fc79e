pub mod book;
#[cfg(feature = "charts")]
pub mod chart;
pub mod error;
pub mod export;
pub mod ledger;
pub mod report;

pub use book::{Book, BudgetScript, Operation};
pub use error::BudgetError;
pub use ledger::{Category, Transaction};
pub use report::{balance_history, spending_by_category, BalancePoint, Spending};
