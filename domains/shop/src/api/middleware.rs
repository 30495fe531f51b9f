//! Shop domain state and auth backend integration

use crate::ShopRepositories;
use axum::extract::FromRef;
use storefront_auth::AuthBackend;

pub use storefront_auth::VerifiedClaims;

/// Application state for the Shop domain
#[derive(Clone)]
pub struct ShopState {
    pub repos: ShopRepositories,
    pub auth: AuthBackend,
}

impl FromRef<ShopState> for AuthBackend {
    fn from_ref(state: &ShopState) -> Self {
        state.auth.clone()
    }
}
