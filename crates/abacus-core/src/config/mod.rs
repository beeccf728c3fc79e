pub mod settings;

pub use settings::{AbacusConfig, BudgetSettings, ChartSettings, ProbabilitySettings};
