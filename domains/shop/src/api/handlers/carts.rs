//! Cart API handlers
//!
//! - GET /carts?email= - List the caller's own cart items
//! - POST /carts - Add an item to a cart
//! - DELETE /carts/{id} - Remove an item from a cart

use axum::{
    extract::{Query, State},
    Json,
};
use storefront_common::{Error, PathParam, Result, ValidatedJson};
use storefront_store::{DeleteResult, Document, InsertResult};
use uuid::Uuid;

use crate::api::middleware::{ShopState, VerifiedClaims};
use crate::{CartQuery, NewCartItem};

/// GET /carts?email= - List the caller's own cart items
///
/// No email yields an empty list. An email other than the verified caller's
/// is refused.
pub async fn list_cart(
    VerifiedClaims(claims): VerifiedClaims,
    State(state): State<ShopState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<Document>>> {
    let Some(email) = query.email.filter(|e| !e.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    if email != claims.email {
        tracing::warn!(caller = %claims.email, requested = %email, "Cart access refused");
        return Err(Error::Forbidden("forbidden access".to_string()));
    }

    let items = state.repos.carts.list_by_email(&email).await?;
    Ok(Json(items))
}

/// POST /carts - Add an item to a cart
pub async fn add_to_cart(
    State(state): State<ShopState>,
    ValidatedJson(item): ValidatedJson<NewCartItem>,
) -> Result<Json<InsertResult>> {
    let result = state.repos.carts.add(item.into_document()).await?;
    Ok(Json(result))
}

/// DELETE /carts/{id} - Remove an item from a cart
pub async fn remove_from_cart(
    State(state): State<ShopState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DeleteResult>> {
    let result = state.repos.carts.remove(id).await?;
    Ok(Json(result))
}
