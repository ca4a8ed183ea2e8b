//! Middleware stack for the gateway.
//!
//! Layer order: Request → Tracing → Timeout → CORS → (per route) Auth → Handler

pub mod auth;
pub mod cors;
pub mod timeout;
pub mod tracing;

pub use auth::{AuthLayer, AuthService};
pub use cors::create_cors_layer;
pub use timeout::TimeoutLayer;
pub use tracing::TracingLayer;
