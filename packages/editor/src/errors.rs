//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Storage error: {0}")]
    Storage(#[from] pagex_common::CommonError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
