//! Axum extractors for authentication

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::claims::IdentityClaims;
use crate::error::AuthError;

/// Identity attached by the token verifier.
///
/// Only valid on routes behind [`crate::Requirement::Authenticated`] or a
/// role requirement; elsewhere it rejects with 500.
#[derive(Debug, Clone)]
pub struct VerifiedClaims(pub IdentityClaims);

impl<S> FromRequestParts<S> for VerifiedClaims
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityClaims>()
            .cloned()
            .map(VerifiedClaims)
            .ok_or_else(|| {
                tracing::error!("VerifiedClaims used on a route without token verification");
                AuthError::MissingClaims
            })
    }
}
