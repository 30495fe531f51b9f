//! Cart endpoint integration tests
//!
//! - GET /carts?email= - Own cart (authenticated)
//! - POST /carts - Add item (public)
//! - DELETE /carts/{id} - Remove item (public)

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{authed_request, document, unauthed_request, unauthorized_body, TestApp};

mod test_list_cart {
    use super::*;

    #[tokio::test]
    async fn test_own_cart_lists_only_own_items() {
        let app = TestApp::new();
        app.insert("carts", document(json!({"email": "a@example.com", "item": "lamp"})))
            .await;
        app.insert("carts", document(json!({"email": "a@example.com", "item": "desk"})))
            .await;
        app.insert("carts", document(json!({"email": "b@example.com", "item": "sofa"})))
            .await;
        let token = app.create_test_jwt("a@example.com");

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/carts?email=a@example.com",
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i["email"] == json!("a@example.com")));
    }

    #[tokio::test]
    async fn test_other_users_cart_is_forbidden() {
        let app = TestApp::new();
        app.insert("carts", document(json!({"email": "b@example.com", "item": "sofa"})))
            .await;
        let token = app.create_test_jwt("a@example.com");

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/carts?email=b@example.com",
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({"error": true, "message": "forbidden access"}));
    }

    #[tokio::test]
    async fn test_missing_email_returns_empty_list() {
        let app = TestApp::new();
        app.insert("carts", document(json!({"email": "a@example.com", "item": "lamp"})))
            .await;
        let token = app.create_test_jwt("a@example.com");

        for uri in ["/carts", "/carts?email="] {
            let (status, body) = app
                .send(authed_request(Method::GET, uri, &token, None))
                .await;
            assert_eq!(status, StatusCode::OK, "uri {}", uri);
            assert_eq!(body, json!([]));
        }
    }

    #[tokio::test]
    async fn test_requires_token() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::GET,
                "/carts?email=a@example.com",
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized_body());
    }
}

mod test_cart_items {
    use super::*;

    #[tokio::test]
    async fn test_add_then_remove_item() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/carts",
                Some(json!({"email": "a@example.com", "productId": "p-1", "quantity": 2})),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(app.store.len("carts"), 1);

        let id = body["insertedId"].as_str().unwrap().to_string();
        let (status, body) = app
            .send(unauthed_request(
                Method::DELETE,
                &format!("/carts/{}", id),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deletedCount"], json!(1));
        assert!(app.store.is_empty("carts"));
    }

    #[tokio::test]
    async fn test_add_item_requires_valid_email() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/carts",
                Some(json!({"email": "nope", "productId": "p-1"})),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
        assert!(app.store.is_empty("carts"));
    }

    #[tokio::test]
    async fn test_add_item_without_email_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/carts",
                Some(json!({"productId": "p-1"})),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
    }

    #[tokio::test]
    async fn test_remove_with_malformed_id_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(Method::DELETE, "/carts/42", None))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
    }
}
