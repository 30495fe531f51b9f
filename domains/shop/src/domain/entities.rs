//! Shop request and response types
//!
//! Documents are schema-flexible: requests name only the fields the server
//! relies on and carry everything else through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_auth::Role;
use storefront_store::{Document, InsertResult};
use validator::Validate;

/// Field every user and cart document is keyed by
pub const EMAIL_FIELD: &str = "email";

/// Sign-in payload signed into an access token
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,

    #[serde(flatten)]
    pub rest: Document,
}

impl SignInRequest {
    pub fn into_payload(self) -> Document {
        let mut payload = self.rest;
        payload.insert(EMAIL_FIELD.to_string(), Value::String(self.email));
        payload
    }
}

/// User registration
#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email)]
    pub email: String,

    #[serde(flatten)]
    pub profile: Document,
}

impl NewUser {
    /// Document to store. Roles are granted only through the admin route,
    /// so a caller-supplied `role` is dropped.
    pub fn into_document(self) -> Document {
        let mut document = self.profile;
        if document.remove(Role::FIELD).is_some() {
            tracing::warn!(email = %self.email, "Ignoring role supplied at registration");
        }
        document.insert(EMAIL_FIELD.to_string(), Value::String(self.email));
        document
    }
}

/// Item added to a cart
#[derive(Debug, Deserialize, Validate)]
pub struct NewCartItem {
    #[validate(email)]
    pub email: String,

    #[serde(flatten)]
    pub item: Document,
}

impl NewCartItem {
    pub fn into_document(self) -> Document {
        let mut document = self.item;
        document.insert(EMAIL_FIELD.to_string(), Value::String(self.email));
        document
    }
}

/// Query string of `GET /carts`
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// Response of `POST /jwt`
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response of `GET /users/admin/{email}`
#[derive(Debug, PartialEq, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `POST /users`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateUserResponse {
    Created(InsertResult),
    AlreadyExists(MessageResponse),
}

impl CreateUserResponse {
    pub fn already_exists() -> Self {
        CreateUserResponse::AlreadyExists(MessageResponse {
            message: "User already exists".to_string(),
        })
    }
}
