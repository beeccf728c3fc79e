use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid ball spec '{0}': expected color=count pairs separated by commas")]
    InvalidSpec(String),

    #[error("Duplicate color in spec: {0}")]
    DuplicateColor(String),

    #[error("Number of experiments must be at least 1")]
    NoExperiments,
}
