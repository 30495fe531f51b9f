//! JWT issuance, validation and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde_json::{Map, Value};

use crate::claims::IdentityClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Validate signature and expiry of an access token
pub(crate) fn validate_jwt_token(
    token: &str,
    config: &AuthConfig,
) -> Result<IdentityClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Payloads are caller-supplied at sign-in; an `aud` field is not ours to check
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data =
        decode::<IdentityClaims>(token, &decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "JWT validation failed");
            AuthError::InvalidToken
        })?;

    Ok(token_data.claims)
}

/// Sign a caller-supplied payload into an access token.
///
/// The payload must carry an `email` string. Any `iat`/`exp` it carries is
/// replaced by the server's own timestamps.
pub(crate) fn issue_jwt_token(
    mut payload: Map<String, Value>,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let email = match payload.remove("email") {
        Some(Value::String(email)) if !email.is_empty() => email,
        _ => return Err(AuthError::MissingEmail),
    };
    payload.remove("iat");
    payload.remove("exp");

    let now = get_current_timestamp();
    let claims = IdentityClaims {
        email,
        iat: now,
        exp: now + config.token_ttl_secs,
        extra: payload,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        AuthError::TokenIssueFailed
    })
}

/// Extract the token from an Authorization header.
///
/// Takes the second space-separated segment whatever the scheme keyword is,
/// so `Bearer <token>` and `Token <token>` are both accepted.
pub(crate) fn extract_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    header_str
        .split(' ')
        .nth(1)
        .ok_or(AuthError::InvalidAuthorizationFormat)
}
