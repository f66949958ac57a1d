use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum DocqaError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
