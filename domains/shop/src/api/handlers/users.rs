//! User management API handlers
//!
//! Implements user operations including:
//! - POST /users - Register a user (idempotent on email)
//! - GET /users - List users (admin)
//! - GET /users/admin/{email} - Whether the caller is an admin
//! - PATCH /users/admin/{id} - Grant the admin role (admin)
//! - DELETE /users/{id} - Delete a user (admin)

use axum::{extract::State, Json};
use storefront_auth::Role;
use storefront_common::{PathParam, Result, ValidatedJson};
use storefront_store::{DeleteResult, Document, UpdateResult};
use uuid::Uuid;

use crate::api::middleware::{ShopState, VerifiedClaims};
use crate::{AdminStatus, CreateUserResponse, NewUser};

/// POST /users - Register a user
pub async fn create_user(
    State(state): State<ShopState>,
    ValidatedJson(user): ValidatedJson<NewUser>,
) -> Result<Json<CreateUserResponse>> {
    if state.repos.users.find_by_email(&user.email).await?.is_some() {
        return Ok(Json(CreateUserResponse::already_exists()));
    }

    let result = state.repos.users.create(user.into_document()).await?;

    tracing::info!(user_id = %result.inserted_id, "User registered");

    Ok(Json(CreateUserResponse::Created(result)))
}

/// GET /users - List users
pub async fn list_users(State(state): State<ShopState>) -> Result<Json<Vec<Document>>> {
    let users = state.repos.users.list().await?;
    Ok(Json(users))
}

/// GET /users/admin/{email} - Whether the caller is an admin
///
/// Only answers for the caller's own email; any other email reports
/// `admin: false` without touching the store.
pub async fn check_admin(
    VerifiedClaims(claims): VerifiedClaims,
    State(state): State<ShopState>,
    PathParam(email): PathParam<String>,
) -> Result<Json<AdminStatus>> {
    if email != claims.email {
        return Ok(Json(AdminStatus { admin: false }));
    }

    let role = state.auth.find_user_role(&email).await?;
    Ok(Json(AdminStatus {
        admin: role == Some(Role::Admin),
    }))
}

/// PATCH /users/admin/{id} - Grant the admin role
pub async fn promote_user(
    VerifiedClaims(claims): VerifiedClaims,
    State(state): State<ShopState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<UpdateResult>> {
    let result = state.repos.users.promote_to_admin(id).await?;

    tracing::info!(
        user_id = %id,
        granted_by = %claims.email,
        matched = result.matched_count,
        "Admin role granted"
    );

    Ok(Json(result))
}

/// DELETE /users/{id} - Delete a user
pub async fn delete_user(
    State(state): State<ShopState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DeleteResult>> {
    let result = state.repos.users.delete(id).await?;
    Ok(Json(result))
}
