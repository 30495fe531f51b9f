//! Gate middleware: token verification and role guard
//!
//! Both stages are `axum::middleware::from_fn_with_state` functions. Use
//! [`crate::RequireExt::require`] to apply them; it fixes the order.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::AuthBackend;
use crate::claims::IdentityClaims;
use crate::error::AuthError;
use crate::jwt::extract_token;
use crate::types::Role;

/// Verify the bearer token and attach its [`IdentityClaims`] to the request.
///
/// Missing header, unparseable header, bad signature and expiry all reject
/// with the same 401. Never touches the store.
pub async fn verify_token(
    State(backend): State<AuthBackend>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthorization)?;

    let claims = backend.verify_token(extract_token(header)?)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Role requirement bound to the backend used for the lookup
#[derive(Clone)]
pub struct RoleGuard {
    backend: AuthBackend,
    required: Role,
}

impl RoleGuard {
    pub fn new(backend: AuthBackend, required: Role) -> Self {
        Self { backend, required }
    }

    pub fn required(&self) -> Role {
        self.required
    }

    /// Check the stored role for the verified caller
    pub async fn authorize(&self, claims: &IdentityClaims) -> Result<(), AuthError> {
        match self.backend.find_user_role(&claims.email).await? {
            Some(role) if role == self.required => Ok(()),
            found => {
                tracing::warn!(
                    email = %claims.email,
                    required = %self.required,
                    found = ?found,
                    "Role check denied"
                );
                Err(AuthError::Forbidden)
            }
        }
    }
}

/// Reject callers whose stored role is not the guard's required role.
///
/// Must run after [`verify_token`]; a request without attached claims is a
/// wiring bug and fails with 500.
pub async fn require_role(
    State(guard): State<RoleGuard>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = request
        .extensions()
        .get::<IdentityClaims>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("Role guard reached without verified claims");
            AuthError::MissingClaims
        })?;

    guard.authorize(&claims).await?;

    Ok(next.run(request).await)
}
