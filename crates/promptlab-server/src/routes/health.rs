//! Health check route

use axum::{routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::AppState;

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
