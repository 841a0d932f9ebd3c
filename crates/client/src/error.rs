//! Client error types.

use shared::pagination::PageError;
use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("Activity drain exceeded {0}s deadline")]
    DrainTimeout(u64),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Invalid page request: {0}")]
    Page(#[from] PageError),

    #[error("Refresh superseded by a newer one")]
    Superseded,
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::Validation(errors.to_string())
    }
}
