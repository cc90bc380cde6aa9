//! Client error types

use shared::error::{AppError, ErrorCode};
use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Signed-in session required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file I/O (session storage)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Map a non-2xx status and its decoded error body.
    pub fn from_status(status: StatusCode, error: AppError) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(error.message),
            StatusCode::NOT_FOUND => ClientError::NotFound(error.message),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                ClientError::Validation(error.message)
            }
            _ if error.code == ErrorCode::ValidationFailed => ClientError::Validation(error.message),
            _ => ClientError::Internal(error.message),
        }
    }

    /// Transient failures worth retrying by the user (network, timeouts, 5xx).
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Internal(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        let err = ClientError::from_status(
            StatusCode::NOT_FOUND,
            AppError::new(ErrorCode::RestaurantNotFound),
        );
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Restaurant not found"));

        let err = ClientError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            AppError::new(ErrorCode::InternalError),
        );
        assert!(err.is_retryable());

        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            AppError::new(ErrorCode::InvalidSaveStatus),
        );
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(!err.is_retryable());
    }
}
