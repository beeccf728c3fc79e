pub mod error;
pub mod experiment;
pub mod hat;
pub mod random;

pub use error::SimError;
pub use experiment::{experiment, Experiment, Outcome, DEFAULT_EXPERIMENTS};
pub use hat::{parse_counts, Hat};
pub use random::create_rng;
