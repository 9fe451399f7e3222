//! Token and admin guard behaviour over HTTP

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{JWT_SECRET, TestApp};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use shared::models::UserRole;

#[tokio::test]
async fn guarded_routes_without_header_are_401() {
    let app = TestApp::new().await;

    for (method, uri) in [
        ("GET", "/users"),
        ("GET", "/orders"),
        ("GET", "/carts?email=a@x.com"),
        ("GET", "/payments/a@x.com"),
        ("GET", "/reservation/a@x.com"),
        ("GET", "/users/admin/a@x.com"),
        ("DELETE", "/menu/1"),
    ] {
        let (status, body) = app.request(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["message"], "unauthorized access");
    }
}

#[tokio::test]
async fn header_without_bearer_token_is_401() {
    let app = TestApp::new().await;

    for value in ["Bearer", "Bearer ", "Token abc"] {
        let req = Request::builder()
            .uri("/users")
            .header("authorization", value)
            .body(Body::empty())
            .unwrap();
        let (status, _) = app.send(req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{value:?}");
    }
}

#[tokio::test]
async fn bad_or_expired_token_is_403() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request("GET", "/payments/a@x.com", Some("garbage.token.value"), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden access");

    let now = chrono::Utc::now().timestamp();
    let expired = encode(
        &Header::default(),
        &json!({ "email": "a@x.com", "iat": now - 4 * 3600, "exp": now - 3600 }),
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();
    let (status, _) = app
        .request("GET", "/payments/a@x.com", Some(&expired), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn issued_token_carries_identity() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request("POST", "/jwt", None, Some(json!({ "email": "a@x.com", "name": "Ana" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let claims = app.jwt.validate_token(&token).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 3 * 3600);

    // The token is accepted by a self-only route for the same email
    let (status, body) = app
        .request("GET", "/payments/a@x.com", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn token_request_without_email_is_400() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request("POST", "/jwt", None, Some(json!({ "name": "Ana" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn non_admin_is_403_on_admin_routes() {
    let app = TestApp::new().await;
    app.seed_user("user@x.com", UserRole::User).await;
    let token = app.token_for("user@x.com");

    for (method, uri) in [
        ("GET", "/users"),
        ("GET", "/orders"),
        ("DELETE", "/users/1"),
        ("DELETE", "/menu/1"),
        ("GET", "/manage-bookings/user@x.com"),
    ] {
        let (status, body) = app.request(method, uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(body["message"], "forbidden access");
    }

    // A valid token for an email with no stored user is not an admin either
    let ghost = app.token_for("ghost@x.com");
    let (status, _) = app.request("GET", "/users", Some(&ghost), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_passes_guard_chain() {
    let app = TestApp::new().await;
    let token = app.admin().await;

    let (status, body) = app.request("GET", "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["role"], "admin");
}

#[tokio::test]
async fn admin_check_is_self_only() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    app.seed_user("user@x.com", UserRole::User).await;
    let user = app.token_for("user@x.com");

    let (status, body) = app
        .request("GET", "/users/admin/admin@bistro.test", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "admin": true }));

    let (status, body) = app
        .request("GET", "/users/admin/user@x.com", Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "admin": false }));

    let (status, _) = app
        .request("GET", "/users/admin/admin@bistro.test", Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
