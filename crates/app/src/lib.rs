//! Storefront application composition root
//!
//! Composes the shop routes with shared infrastructure routes over one
//! injected document store handle.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use storefront_auth::{AuthBackend, AuthConfig};
use storefront_common::{Config, Error};
use storefront_shop::{ShopRepositories, ShopState};
use storefront_store::{DocumentStore, MemoryStore, PostgresStore};

/// `DATABASE_URL` value selecting the in-process store
pub const MEMORY_STORE_URL: &str = "memory://";

/// Open the document store named by the configuration
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn DocumentStore>> {
    if config.database_url == MEMORY_STORE_URL {
        tracing::warn!("Using in-memory document store; data is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = PostgresStore::connect(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Document store connection failed: {}", e))?;
    Ok(Arc::new(store))
}

/// Create the main application router with all routes
pub fn create_app(auth_config: AuthConfig, store: Arc<dyn DocumentStore>) -> Router {
    let auth = AuthBackend::new(store.clone(), auth_config);

    let state = ShopState {
        repos: ShopRepositories::new(store),
        auth: auth.clone(),
    };

    Router::new()
        .route("/", get(|| async { "Server is running..." }))
        .route("/health", get(health_check))
        .merge(storefront_shop::routes(&auth))
        .fallback(route_not_found)
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<ShopState>) -> Result<&'static str, Error> {
    state
        .repos
        .ping()
        .await
        .map_err(|e| Error::Unavailable(format!("Health check failed: {}", e)))?;
    Ok("OK")
}

async fn route_not_found() -> Error {
    Error::NotFound("route not found".to_string())
}
