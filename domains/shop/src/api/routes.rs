//! Route definitions for Shop domain API
//!
//! Each resource splits its routes by gate and merges the groups back
//! together; methods on one path may carry different requirements.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use storefront_auth::{AuthBackend, RequireExt, Requirement, Role};

use super::handlers::{auth, carts, products, reviews, users};
use super::middleware::ShopState;

const ADMIN: Requirement = Requirement::Role(Role::Admin);

/// Create token issuance routes
fn auth_routes() -> Router<ShopState> {
    Router::new().route("/jwt", post(auth::issue_token))
}

/// Create user management routes
fn user_routes(backend: &AuthBackend) -> Router<ShopState> {
    let public = Router::new().route("/users", post(users::create_user));

    // `{id}` is the caller's email for GET and a user id for PATCH
    let own = Router::new()
        .route("/users/admin/{id}", get(users::check_admin))
        .require(Requirement::Authenticated, backend);

    let admin = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/admin/{id}", patch(users::promote_user))
        .route("/users/{id}", delete(users::delete_user))
        .require(ADMIN, backend);

    public.merge(own).merge(admin)
}

/// Create product catalog routes
fn product_routes(backend: &AuthBackend) -> Router<ShopState> {
    let public = Router::new().route("/products", get(products::list_products));

    let admin = Router::new()
        .route("/products", post(products::create_product))
        .route("/products/{id}", delete(products::delete_product))
        .require(ADMIN, backend);

    public.merge(admin)
}

/// Create review routes
fn review_routes() -> Router<ShopState> {
    Router::new().route("/reviews", get(reviews::list_reviews))
}

/// Create cart routes
fn cart_routes(backend: &AuthBackend) -> Router<ShopState> {
    let public = Router::new()
        .route("/carts", post(carts::add_to_cart))
        .route("/carts/{id}", delete(carts::remove_from_cart));

    let own = Router::new()
        .route("/carts", get(carts::list_cart))
        .require(Requirement::Authenticated, backend);

    public.merge(own)
}

/// Create all Shop domain API routes
pub fn routes(backend: &AuthBackend) -> Router<ShopState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes(backend))
        .merge(product_routes(backend))
        .merge(review_routes())
        .merge(cart_routes(backend))
}
