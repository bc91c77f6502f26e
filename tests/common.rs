#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

use soulspace_server::api::{self, AppState};
use soulspace_server::config::{Config, LogFormat, ServerConfig, SessionConfig, TelemetryConfig};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("soulspace_server=debug".parse().unwrap())
            .add_directive("sqlx=warn".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0 },
        session: SessionConfig { ttl_days: 30, secure_cookies: false },
        telemetry: TelemetryConfig { log_format: LogFormat::Text },
    }
}

pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Boots the full router against a private in-memory database and returns
    /// a cookie-keeping client pointed at it.
    pub async fn spawn() -> Self {
        setup_tracing();

        // One connection keeps the :memory: database alive and shared.
        let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap().foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();

        let state = AppState::new(test_config(), pool.clone());
        let app = api::app_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { server_url: format!("http://{addr}"), client: new_client(), pool }
    }
}

/// A fresh client with its own cookie jar; use a second one to act as another user.
pub fn new_client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().unwrap()
}

/// Signs the client up (which also logs it in) and returns the user body.
pub async fn signup_user(
    app: &TestApp,
    client: &reqwest::Client,
    username: &str,
    email: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!("{}/signup", app.server_url))
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": "secret1",
            "password_confirmation": "secret1"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.unwrap()
}
