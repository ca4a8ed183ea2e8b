//! Gateway error types.
//!
//! `ApiError` is what clients see; `GatewayError` is what startup code sees.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Stable, machine-readable error codes carried in error bodies
pub mod codes {
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const NOT_FOUND: &str = "not_found";
    pub const TIMEOUT: &str = "timeout";
}

/// Client-facing API error
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (see [`codes`])
    pub code: &'static str,
    /// Human readable message
    pub message: String,
    /// HTTP status the error maps to
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status,
        }
    }

    /// Unauthorized - missing or invalid credentials
    pub fn unauthorized(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            codes::UNAUTHORIZED,
            format!("Unauthorized: {}", details.into()),
        )
    }

    pub fn not_found(path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            format!("No route for {}", path),
        )
    }

    /// Request took longer than the configured timeout
    pub fn timeout(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::REQUEST_TIMEOUT,
            codes::TIMEOUT,
            format!("Request timeout: {}", details.into()),
        )
    }

    fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.body().serialize(serializer)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body())).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Gateway-level errors (startup and serving, never sent to clients)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(#[from] crate::domain::config::ConfigError),

    /// Authentication key material could not be loaded
    #[error("authentication setup error: {0}")]
    Auth(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_error() {
        let err = ApiError::unauthorized("missing bearer token");
        assert_eq!(err.code, codes::UNAUTHORIZED);
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert!(err.message.contains("missing bearer token"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unauthorized("token expired");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"]["code"], "unauthorized");
        assert_eq!(json["error"]["message"], "Unauthorized: token expired");
    }

    #[test]
    fn test_unauthorized_response_challenges_bearer() {
        let response = ApiError::unauthorized("nope").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_not_found_response_has_no_challenge() {
        let response = ApiError::not_found("/nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_display() {
        let err = ApiError::timeout("slow");
        assert_eq!(err.to_string(), "[timeout] Request timeout: slow");
    }
}
