use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Boundary validation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid block type: {0}")]
    InvalidBlockType(String),

    #[error("Invalid block id: {0}")]
    InvalidBlockId(String),

    #[error("Invalid direction: {0} (expected \"up\" or \"down\")")]
    InvalidDirection(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}
