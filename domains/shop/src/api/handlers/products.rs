//! Product API handlers
//!
//! - GET /products - List products
//! - POST /products - Create a product (admin)
//! - DELETE /products/{id} - Delete a product (admin)

use axum::{extract::State, Json};
use storefront_common::{JsonBody, PathParam, Result};
use storefront_store::{DeleteResult, Document, InsertResult};
use uuid::Uuid;

use crate::api::middleware::ShopState;

/// GET /products - List products
pub async fn list_products(State(state): State<ShopState>) -> Result<Json<Vec<Document>>> {
    let products = state.repos.products.list().await?;
    Ok(Json(products))
}

/// POST /products - Create a product
pub async fn create_product(
    State(state): State<ShopState>,
    JsonBody(product): JsonBody<Document>,
) -> Result<Json<InsertResult>> {
    let result = state.repos.products.create(product).await?;

    tracing::info!(product_id = %result.inserted_id, "Product created");

    Ok(Json(result))
}

/// DELETE /products/{id} - Delete a product
pub async fn delete_product(
    State(state): State<ShopState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DeleteResult>> {
    let result = state.repos.products.delete(id).await?;

    tracing::info!(product_id = %id, deleted = result.deleted_count, "Product delete");

    Ok(Json(result))
}
