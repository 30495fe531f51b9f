//! Token issuance and gate integration tests
//!
//! - POST /jwt - Sign a payload into an access token
//! - Authorization header handling on gated routes

use axum::http::{Method, StatusCode};
use serde_json::{json, Map};
use storefront_auth::IdentityClaims;

use crate::common::{
    authed_request, forbidden_body, request_with_header, sign_claims, unauthed_request,
    unauthorized_body, TestApp,
};

mod test_issue_token {
    use super::*;

    #[tokio::test]
    async fn test_issued_token_opens_authenticated_routes() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/jwt",
                Some(json!({"email": "alice@example.com", "name": "Alice"})),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        let token = body["token"].as_str().expect("token string");
        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/carts?email=alice@example.com",
                token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_issue_token_rejects_invalid_email() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/jwt",
                Some(json!({"email": "not-an-email"})),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
    }

    #[tokio::test]
    async fn test_issue_token_requires_email() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/jwt",
                Some(json!({"name": "Alice"})),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
        assert!(body["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn test_issue_token_rejects_malformed_json() {
        let app = TestApp::new();
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/jwt")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
        assert!(body["message"].is_string());
    }
}

mod test_token_gate {
    use super::*;

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(Method::GET, "/users", None))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized_body());
    }

    #[tokio::test]
    async fn test_header_without_token_is_unauthorized() {
        let app = TestApp::new();

        for header in ["Bearer", "garbage"] {
            let (status, body) = app
                .send(request_with_header(
                    Method::GET,
                    "/carts?email=a@example.com",
                    Some(header.to_string()),
                    None,
                ))
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "header {:?}", header);
            assert_eq!(body, unauthorized_body());
        }
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let app = TestApp::new();
        let token = app.create_expired_jwt("alice@example.com");

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/carts?email=alice@example.com",
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized_body());
    }

    #[tokio::test]
    async fn test_foreign_secret_is_unauthorized() {
        let app = TestApp::new();
        let now = jsonwebtoken::get_current_timestamp();
        let token = sign_claims(
            &IdentityClaims {
                email: "alice@example.com".to_string(),
                iat: now,
                exp: now + 3600,
                extra: Map::new(),
            },
            "some_other_secret",
        );

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/carts?email=alice@example.com",
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized_body());
    }

    #[tokio::test]
    async fn test_bad_token_is_rejected_before_role_check() {
        let app = TestApp::new();
        app.create_test_user("admin@example.com", Some("admin")).await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/users", "not.a.jwt", None))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized_body());
    }

    #[tokio::test]
    async fn test_valid_token_without_user_record_is_forbidden() {
        let app = TestApp::new();
        let token = app.create_test_jwt("ghost@example.com");

        let (status, body) = app
            .send(authed_request(Method::GET, "/users", &token, None))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, forbidden_body());
    }
}

mod test_public_routes {
    use super::*;

    #[tokio::test]
    async fn test_root_and_health_need_no_token() {
        let app = TestApp::new();

        let response = tower::ServiceExt::oneshot(
            app.test_router(),
            unauthed_request(Method::GET, "/", None),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = tower::ServiceExt::oneshot(
            app.test_router(),
            unauthed_request(Method::GET, "/health", None),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(Method::GET, "/orders", None))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": true, "message": "route not found"}));
    }
}
