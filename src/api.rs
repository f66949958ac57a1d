//! Backend API boundary
//!
//! Typed request/response records, an async HTTP client for the document
//! question-answering service, and a worker thread that runs the client off the
//! UI thread.

pub mod api_types;
pub mod client;
pub mod worker;

use thiserror::Error;

pub use api_types::{
    DeleteResponse, Document, DocumentStatus, QueryResponse, QuerySource, UploadResponse,
};
pub use client::{ALLOWED_EXTENSIONS, ApiClient, validate_upload_path};
pub use worker::{ApiOperation, ApiRequest, ApiResponse, spawn_worker};

/// Errors that can occur while talking to the backend
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The file cannot be uploaded (missing, unreadable or wrong type)
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// A required form field is empty
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Backend returned a non-success status
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Backend-provided detail when there is one, for inline display
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Api { detail, .. } if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
