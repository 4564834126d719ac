#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use docchat::application::TokenService;
use docchat::config::AppConfig;
use docchat::infrastructure::AppContainer;
use docchat::presentation::http::HttpServer;

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<TokenService>,
    pub config: AppConfig,
    dir: TempDir,
}

pub fn spawn_app(require_auth: bool) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_url: dir.path().join("test.db").to_string_lossy().to_string(),
        jwt_secret: "integration-secret".to_string(),
        require_auth,
        ..AppConfig::default()
    };
    build(dir, config)
}

fn build(dir: TempDir, config: AppConfig) -> TestApp {
    let container = AppContainer::new(&config).unwrap();
    let router = HttpServer::new(&container, &config).router();
    TestApp {
        router,
        tokens: container.token_service.clone(),
        config,
        dir,
    }
}

impl TestApp {
    /// A fresh app over the same database file.
    pub fn restart(self) -> TestApp {
        let config = self.config.clone();
        build(self.dir, config)
    }

    /// Removes the directory holding the database file, so every later
    /// storage call fails to open a connection.
    pub fn remove_storage(&self) {
        std::fs::remove_dir_all(self.dir.path()).unwrap();
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body), None).await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None, None).await
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/auth/signup",
            serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/auth/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }
}

pub fn upload_uri(user_id: i32, filename: &str, content: &str) -> String {
    format!(
        "/api/documents/upload?user_id={}&filename={}&content={}",
        user_id,
        urlencoding::encode(filename),
        urlencoding::encode(content)
    )
}

pub fn search_uri(user_id: i32, query: &str) -> String {
    format!(
        "/api/search?user_id={}&query={}",
        user_id,
        urlencoding::encode(query)
    )
}
