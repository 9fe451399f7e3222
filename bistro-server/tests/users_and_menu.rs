//! User registration/roles and menu CRUD

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use shared::models::UserRole;

#[tokio::test]
async fn banner_and_health() {
    let app = TestApp::new().await;
    let (status, body) = app.request("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _) = app.request("GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_user_is_reported_not_inserted() {
    let app = TestApp::new().await;
    let user = json!({ "email": "a@x.com", "name": "Ana" });

    let (status, first) = app.request("POST", "/users", None, Some(user.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["acknowledged"], true);
    assert!(first["insertedId"].is_i64());

    let (status, second) = app.request("POST", "/users", None, Some(user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        second,
        json!({ "message": "user already exists", "insertedId": null })
    );

    let admin = app.admin().await;
    let (_, users) = app.request("GET", "/users", Some(&admin), None).await;
    let with_email = users
        .as_array()
        .unwrap()
        .iter()
        .filter(|u| u["email"] == "a@x.com")
        .count();
    assert_eq!(with_email, 1);
}

#[tokio::test]
async fn admin_changes_role_and_deletes_user() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let (_, created) = app
        .request("POST", "/users", None, Some(json!({ "email": "b@x.com" })))
        .await;
    let id = created["insertedId"].as_i64().unwrap();

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/users/admin/{id}"),
            Some(&admin),
            Some(json!({ "role": "admin" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);

    let promoted = app.token_for("b@x.com");
    let (status, _) = app.request("GET", "/users", Some(&promoted), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request("DELETE", &format!("/users/{id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    // Deleted user loses admin access immediately
    let (status, _) = app.request("GET", "/users", Some(&promoted), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_ids_are_400() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let (status, body) = app
        .request("DELETE", "/users/65a1f0c2e4b0", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    let (status, _) = app.request("GET", "/menu/not-an-id", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request("DELETE", "/carts/xyz", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_crud() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let id = app.seed_menu_item("Pho", "soup", 9.5).await;

    let (status, item) = app.request("GET", &format!("/menu/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["name"], "Pho");
    assert_eq!(item["price"], 9.5);

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/menu/{id}"),
            Some(&admin),
            Some(json!({ "price": 11.0, "rating": 4.8 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 1);

    let (_, item) = app.request("GET", &format!("/menu/{id}"), None, None).await;
    assert_eq!(item["price"], 11.0);
    assert_eq!(item["category"], "soup");
    assert_eq!(item["rating"], 4.8);

    let (_, list) = app.request("GET", "/menu", None, None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = app
        .request("DELETE", &format!("/menu/{id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    let (status, body) = app.request("GET", &format!("/menu/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn menu_writes_need_admin() {
    let app = TestApp::new().await;
    let id = app.seed_menu_item("Pho", "soup", 9.5).await;
    app.seed_user("user@x.com", UserRole::User).await;
    let user = app.token_for("user@x.com");

    let (status, _) = app
        .request(
            "PATCH",
            &format!("/menu/{id}"),
            Some(&user),
            Some(json!({ "price": 0.5 })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.request("DELETE", &format!("/menu/{id}"), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, item) = app.request("GET", &format!("/menu/{id}"), None, None).await;
    assert_eq!(item["price"], 9.5);
}

#[tokio::test]
async fn negative_menu_price_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let (status, body) = app
        .request(
            "POST",
            "/menu",
            Some(&admin),
            Some(json!({
                "name": "Free lunch",
                "category": "misc",
                "price": -3.0,
                "recipe": "",
                "image": "",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
}
