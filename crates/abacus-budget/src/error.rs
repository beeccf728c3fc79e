use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Balance of {0} would exceed the largest representable amount")]
    AmountOverflow(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Cannot transfer from {0} to itself")]
    SelfTransfer(String),

    #[error("No categories to plot")]
    NothingToPlot,

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
