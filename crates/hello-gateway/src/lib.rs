//! Hello Gateway - authenticated greeting API.
//!
//! Serves `GET /api/hello`, answering `Hello <principal name>` for callers that
//! present a valid bearer credential.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        HELLO GATEWAY                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                  Middleware Stack                       │  │
//! │  │            Tracing → Timeout → CORS                     │  │
//! │  └──────────────────────────┬─────────────────────────────┘  │
//! │                             │                                │
//! │  ┌──────────────────────────┴─────────────────────────────┐  │
//! │  │                    Route Table                          │  │
//! │  │   GET /health (public)    GET /api/hello (auth)         │  │
//! │  └──────────────┬───────────────────────┬─────────────────┘  │
//! │                 │                       │                    │
//! │                 │          ┌────────────┴─────────────┐      │
//! │                 │          │        AuthLayer          │      │
//! │                 │          │  Static token → JWT       │      │
//! │                 │          └────────────┬─────────────┘      │
//! │                 ▼                       ▼                    │
//! │          health_check        hello(AuthenticatedPrincipal)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use hello_gateway::{GatewayConfig, GreetingGateway};
//!
//! let gateway = GreetingGateway::new(GatewayConfig::from_env()?)?;
//! let running = gateway.start().await?;
//! running.run_until(async { tokio::signal::ctrl_c().await.ok(); }).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod ports;
pub mod router;
pub mod service;
pub mod telemetry;

// Re-exports for public API
pub use domain::config::GatewayConfig;
pub use domain::error::{ApiError, GatewayError};
pub use domain::greeting::{greet, GreetingResponse};
pub use domain::principal::{AuthenticatedPrincipal, CredentialKind};
pub use ports::{AuthError, Authenticator};
pub use router::{build_router, route_table, Access, Route};
pub use service::{GreetingGateway, RunningGateway};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
