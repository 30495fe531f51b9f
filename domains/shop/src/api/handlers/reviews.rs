//! Review API handlers

use axum::{extract::State, Json};
use storefront_common::Result;
use storefront_store::Document;

use crate::api::middleware::ShopState;

/// GET /reviews - List reviews
pub async fn list_reviews(State(state): State<ShopState>) -> Result<Json<Vec<Document>>> {
    let reviews = state.repos.reviews.list().await?;
    Ok(Json(reviews))
}
