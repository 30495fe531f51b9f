//! Common test utilities and fixtures for integration tests
//!
//! - An application router over a fresh in-memory store per test
//! - Token helpers (valid, expired, foreign-secret)
//! - Document fixtures
//! - Request builders and response parsing

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};
use storefront_auth::{AuthBackend, AuthConfig, IdentityClaims};
use storefront_store::{Document, DocumentStore, Filter, MemoryStore};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

/// Test application with direct access to its store
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub auth_config: AuthConfig,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let auth_config = AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            token_ttl_secs: 3600,
        };
        let router = storefront_app::create_app(auth_config.clone(), store.clone());

        Self {
            store,
            auth_config,
            router,
        }
    }

    pub fn test_router(&self) -> Router {
        self.router.clone()
    }

    /// Sign a token for `email` the way `POST /jwt` does
    pub fn create_test_jwt(&self, email: &str) -> String {
        AuthBackend::new(self.store.clone(), self.auth_config.clone())
            .issue_token(document(json!({ "email": email })))
            .expect("Failed to issue test JWT")
    }

    /// Token for `email` that expired a minute ago
    pub fn create_expired_jwt(&self, email: &str) -> String {
        let now = get_current_timestamp();
        sign_claims(
            &IdentityClaims {
                email: email.to_string(),
                iat: now - 3600,
                exp: now - 60,
                extra: Map::new(),
            },
            TEST_SECRET,
        )
    }

    /// Insert a user record; `role` of `None` leaves the field absent
    pub async fn create_test_user(&self, email: &str, role: Option<&str>) -> Uuid {
        let mut user = document(json!({ "email": email, "name": "Test User" }));
        if let Some(role) = role {
            user.insert("role".to_string(), json!(role));
        }
        self.insert("users", user).await
    }

    pub async fn insert(&self, collection: &str, doc: Document) -> Uuid {
        let result = self
            .store
            .insert_one(collection, doc)
            .await
            .expect("Failed to insert fixture");
        Uuid::parse_str(&result.inserted_id).expect("inserted id is a UUID")
    }

    pub async fn find_one(&self, collection: &str, filter: Filter) -> Option<Document> {
        self.store
            .find_one(collection, &filter)
            .await
            .expect("Failed to read fixture")
    }

    /// Send a request and return status plus parsed JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.test_router().oneshot(request).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }
}

/// Sign arbitrary claims with the given secret
pub fn sign_claims(claims: &IdentityClaims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to encode JWT")
}

pub fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {}", other),
    }
}

/// Build a request carrying `Authorization: Bearer <jwt>`
pub fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    request_with_header(method, uri, Some(format!("Bearer {}", jwt)), body)
}

/// Build a request without an authorization header
pub fn unauthed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    request_with_header(method, uri, None, body)
}

/// Build a request with a raw authorization header value
pub fn request_with_header(
    method: Method,
    uri: &str,
    authorization: Option<String>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Parse response body as JSON, `Value::Null` for empty or non-JSON bodies
pub async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

pub fn unauthorized_body() -> Value {
    json!({"error": true, "message": "unauthorized access"})
}

pub fn forbidden_body() -> Value {
    json!({"error": true, "message": "forbidden request"})
}
