//! Concrete authentication backend
//!
//! Wraps the injected document store handle and `AuthConfig`, and owns the
//! one store read the gate performs: the role lookup by email.

use std::sync::Arc;

use serde_json::{Map, Value};
use storefront_store::{collections, DocumentStore, Filter};

use crate::claims::IdentityClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::Role;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    store: Arc<dyn DocumentStore>,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(store: Arc<dyn DocumentStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Verify an access token's signature and expiry
    pub fn verify_token(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        crate::jwt::validate_jwt_token(token, &self.config)
    }

    /// Sign a sign-in payload into an access token
    pub fn issue_token(&self, payload: Map<String, Value>) -> Result<String, AuthError> {
        crate::jwt::issue_jwt_token(payload, &self.config)
    }

    /// Stored role of the user with this email.
    ///
    /// `None` when no user record exists. Never cached: every call reads
    /// the store.
    pub async fn find_user_role(&self, email: &str) -> Result<Option<Role>, AuthError> {
        let user = self
            .store
            .find_one(collections::USERS, &Filter::eq("email", email))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to load user role");
                AuthError::RoleLookupFailed
            })?;

        Ok(user.map(|doc| Role::from_stored(doc.get(Role::FIELD))))
    }
}
