use axum::{response::IntoResponse, Json};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "hello-gateway",
        "version": crate::VERSION
    }))
}
