pub mod arithmetic;
pub mod clock;
pub mod config;
pub mod error;
pub mod shapes;
pub mod stats;

pub use arithmetic::{arrange, Operator, Problem};
pub use clock::{add_time, ClockTime, Duration, Meridiem, TimeSum};
pub use config::AbacusConfig;
pub use error::CoreError;
pub use shapes::{Rectangle, Shape, Square};
pub use stats::{calculate, Reduction, StatsReport};
