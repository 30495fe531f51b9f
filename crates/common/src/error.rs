//! Common error types and handling for Storefront

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_store::StoreError;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned for every 500; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Message returned for every 503
pub const UNAVAILABLE_ERROR_MESSAGE: &str = "service unavailable";

/// Common error type for the Storefront application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// A dependency such as the document store cannot serve requests
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) | Error::Store(StoreError::InvalidDocument(_)) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Store(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            Error::Authentication(msg)
            | Error::Validation(msg)
            | Error::NotFound(msg)
            | Error::Forbidden(msg)
            | Error::Store(StoreError::InvalidDocument(msg)) => msg.clone(),
            Error::Store(_) | Error::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            Error::Unavailable(_) => UNAVAILABLE_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with full context
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Server error");
        }

        let body = Json(json!({
            "error": true,
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}
