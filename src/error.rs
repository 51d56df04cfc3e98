use thiserror::Error;

/// Failures while collecting the run settings from the user.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to talk to the console: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before an answer was given")]
    UnexpectedEof,
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("the number of cells cannot be negative, got {0}")]
    NegativeCellCount(i64),
    #[error("generations per second must be positive, got {0}")]
    NonPositiveRate(i64),
    #[error("CONWAY_SEED must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),
}
