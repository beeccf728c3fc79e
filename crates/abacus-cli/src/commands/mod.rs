pub mod arrange;
pub mod budget;
pub mod probability;
pub mod shapes;
pub mod stats;
pub mod time;
pub mod version;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Arrange addition and subtraction problems vertically
    Arrange(arrange::ArrangeArgs),
    /// Add a duration to a 12-hour clock time
    Time(time::TimeArgs),
    /// Mean, variance, standard deviation, max, min and sum of a 3x3 grid
    Stats(stats::StatsArgs),
    /// Measure a rectangle or square
    Shapes(shapes::ShapesArgs),
    /// Estimate a draw probability by repeated experiments
    Probability(probability::ProbabilityArgs),
    /// Run a budget script (or the demo) and print the ledgers
    Budget(budget::BudgetArgs),
    /// Print version information
    Version,
}
