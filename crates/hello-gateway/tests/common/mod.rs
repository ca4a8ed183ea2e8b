//! Shared helpers for the integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use hello_gateway::domain::config::{JwtConfig, StaticToken};
use hello_gateway::{GatewayConfig, GreetingGateway};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const DEV_TOKEN: &str = "dev-token-alice";
pub const RSA_PRIVATE: &str = include_str!("../fixtures/test_rsa_private.pem");
pub const RSA_PUBLIC: &str = include_str!("../fixtures/test_rsa_public.pem");

pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// HS256 JWT plus one static token
pub fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.auth.jwt = Some(JwtConfig {
        algorithm: "HS256".to_string(),
        secret: Some(JWT_SECRET.to_string()),
        ..JwtConfig::default()
    });
    config.auth.static_tokens = vec![StaticToken {
        token: DEV_TOKEN.to_string(),
        principal: "Alice".to_string(),
    }];
    config
}

pub fn router(config: GatewayConfig) -> Router {
    GreetingGateway::new(config).unwrap().router()
}

pub fn sign(claims: Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn sign_rs256(claims: Value) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::RS256),
        &claims,
        &EncodingKey::from_rsa_pem(RSA_PRIVATE.as_bytes()).unwrap(),
    )
    .unwrap()
}

/// Valid HS256 token for `name`
pub fn token_for(name: &str) -> String {
    sign(
        serde_json::json!({ "sub": "user-id", "preferred_username": name, "exp": now() + 3600 }),
        JWT_SECRET,
    )
}

pub fn get(path: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
