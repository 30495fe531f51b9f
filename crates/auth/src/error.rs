//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_common::Error;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    /// Stored role does not grant the required privilege
    Forbidden,
    /// Role guard or claims extractor ran on a request the verifier never saw
    MissingClaims,
    RoleLookupFailed,
    /// Token issuance payload lacks an `email` string
    MissingEmail,
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::MissingEmail => StatusCode::BAD_REQUEST,
            AuthError::MissingClaims
            | AuthError::RoleLookupFailed
            | AuthError::TokenIssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken => "unauthorized access",
            AuthError::Forbidden => "forbidden request",
            AuthError::MissingEmail => "email is required",
            AuthError::MissingClaims
            | AuthError::RoleLookupFailed
            | AuthError::TokenIssueFailed => "internal server error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": true,
            "message": self.message(),
        }));

        (self.status_code(), body).into_response()
    }
}

/// Lets route handlers returning `storefront_common::Result` use `?` on gate calls
impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken => Error::Authentication(err.message().to_string()),
            AuthError::Forbidden => Error::Forbidden(err.message().to_string()),
            AuthError::MissingEmail => Error::Validation(err.message().to_string()),
            AuthError::MissingClaims | AuthError::RoleLookupFailed | AuthError::TokenIssueFailed => {
                Error::Internal(format!("{:?}", err))
            }
        }
    }
}
