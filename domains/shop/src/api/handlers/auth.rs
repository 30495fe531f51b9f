//! Token issuance API handler
//!
//! Implements:
//! - POST /jwt - Sign the sign-in payload into a time-boxed access token

use axum::{extract::State, Json};
use storefront_common::{Result, ValidatedJson};

use crate::api::middleware::ShopState;
use crate::{SignInRequest, TokenResponse};

/// POST /jwt - Sign the sign-in payload into a time-boxed access token
pub async fn issue_token(
    State(state): State<ShopState>,
    ValidatedJson(request): ValidatedJson<SignInRequest>,
) -> Result<Json<TokenResponse>> {
    let email = request.email.clone();
    let token = state.auth.issue_token(request.into_payload())?;

    tracing::debug!(email = %email, "Issued access token");

    Ok(Json(TokenResponse { token }))
}
