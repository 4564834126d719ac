use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use chrono::Utc;

use crate::presentation::http::dto::{HealthResponseDto, RootResponseDto};

pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
}

async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponseDto {
            message: "DocChat API is running".to_string(),
            status: "ok".to_string(),
        }),
    )
}

async fn health_handler() -> impl IntoResponse {
    let health_response = HealthResponseDto {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(health_response))
}
