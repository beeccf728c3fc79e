use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Error: Too many problems.")]
    TooManyProblems,

    #[error("Error: No problems given.")]
    NoProblems,

    #[error("Error: Each problem must contain two operands and an operator.")]
    MalformedProblem,

    #[error("Error: Operator must be '+' or '-'.")]
    UnsupportedOperator,

    #[error("Error: Numbers must only contain digits.")]
    NonDigitOperand,

    #[error("Error: Numbers cannot be more than four digits.")]
    OperandTooLong,

    #[error("Invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("Invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("Unknown day of week: {0}")]
    UnknownWeekday(String),

    #[error("List must contain nine numbers.")]
    WrongValueCount(usize),

    #[error("Statistics input must be finite, got {0}")]
    NonFinite(f64),

    #[error("Cannot fit a shape with a zero-length side: {0}")]
    DegenerateShape(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
