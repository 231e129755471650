use thiserror::Error;

/// Errors raised by the key-value storage layer
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Generic error: {0}")]
    Generic(String),
}
