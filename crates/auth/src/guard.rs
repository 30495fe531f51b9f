//! Route gate composition
//!
//! A router declares what it needs with a [`Requirement`]; `require` layers
//! the matching middleware, always token verification outside the role guard.

use axum::{middleware, Router};
use tower::ServiceBuilder;

use crate::backend::AuthBackend;
use crate::middleware::{require_role, verify_token, RoleGuard};
use crate::types::Role;

/// Capability a route group requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A valid, unexpired access token
    Authenticated,
    /// A valid token whose owner's stored role is the given one
    Role(Role),
}

pub trait RequireExt {
    /// Gate every route already added to this router.
    ///
    /// Call after the routes are registered: like `route_layer`, it does not
    /// apply to routes added later.
    fn require(self, requirement: Requirement, backend: &AuthBackend) -> Self;
}

impl<S> RequireExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn require(self, requirement: Requirement, backend: &AuthBackend) -> Self {
        let verify = middleware::from_fn_with_state(backend.clone(), verify_token);

        match requirement {
            Requirement::Authenticated => self.route_layer(verify),
            Requirement::Role(role) => self.route_layer(
                ServiceBuilder::new().layer(verify).layer(middleware::from_fn_with_state(
                    RoleGuard::new(backend.clone(), role),
                    require_role,
                )),
            ),
        }
    }
}
