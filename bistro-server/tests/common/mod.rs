//! Shared harness for the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bistro_server::auth::JwtService;
use bistro_server::stripe::{GatewayError, PaymentGateway, PaymentIntent};
use bistro_server::{AppState, create_router, db};
use serde_json::{Value, json};
use shared::models::UserRole;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret-0123456789";

/// Payment provider double that records requested amounts
#[derive(Default)]
pub struct FakeGateway {
    pub amounts: Mutex<Vec<(i64, String)>>,
    pub fail: bool,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        if self.fail {
            return Err(GatewayError::Rejected("card_declined".into()));
        }
        let mut amounts = self.amounts.lock().unwrap();
        amounts.push((amount_minor, currency.to_string()));
        Ok(PaymentIntent {
            id: format!("pi_fake_{}", amounts.len()),
            client_secret: format!("pi_fake_{}_secret", amounts.len()),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub jwt: JwtService,
    pub gateway: Arc<FakeGateway>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_gateway(FakeGateway::default()).await
    }

    pub async fn with_gateway(gateway: FakeGateway) -> Self {
        // One connection: each in-memory connection is a separate database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::run_migrations(&pool).await.unwrap();

        let jwt = JwtService::new(JWT_SECRET);
        let gateway = Arc::new(gateway);
        let state = AppState::from_parts(pool.clone(), jwt.clone(), gateway.clone(), None);

        Self {
            router: create_router(state),
            pool,
            jwt,
            gateway,
        }
    }

    pub fn token_for(&self, email: &str) -> String {
        self.jwt.generate_token(&json!({ "email": email })).unwrap()
    }

    /// Register a user and give it the requested role
    pub async fn seed_user(&self, email: &str, role: UserRole) {
        let (status, _) = self
            .request("POST", "/users", None, Some(json!({ "email": email })))
            .await;
        assert_eq!(status, StatusCode::OK);
        sqlx::query("UPDATE user SET role = ? WHERE email = ?")
            .bind(role)
            .bind(email)
            .execute(&self.pool)
            .await
            .unwrap();
    }

    /// Admin user plus its token
    pub async fn admin(&self) -> String {
        self.seed_user("admin@bistro.test", UserRole::Admin).await;
        self.token_for("admin@bistro.test")
    }

    pub async fn seed_menu_item(&self, name: &str, category: &str, price: f64) -> i64 {
        let token = self.admin().await;
        let (status, body) = self
            .request(
                "POST",
                "/menu",
                Some(&token),
                Some(json!({
                    "name": name,
                    "category": category,
                    "price": price,
                    "recipe": "chef's secret",
                    "image": format!("http://img/{name}.png"),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["insertedId"].as_i64().unwrap()
    }

    pub async fn add_to_cart(&self, email: &str, menu_item_id: i64, price: f64) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/carts",
                None,
                Some(json!({
                    "email": email,
                    "menuItemId": menu_item_id,
                    "name": "line",
                    "price": price,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["insertedId"].as_i64().unwrap()
    }

    /// Send a request and decode the body as JSON (`Null` for empty or non-JSON bodies)
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
