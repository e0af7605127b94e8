use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid answer '{token}' at position {position} (use 1/y/+/c or 0/n/-/x)")]
    InvalidAnswerToken { token: char, position: usize },

    #[error("answer script is empty")]
    EmptyScript,

    #[error("accuracy must be between 0 and 1, got {0}")]
    InvalidAccuracy(f64),

    #[error("config error: {0}")]
    Config(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
