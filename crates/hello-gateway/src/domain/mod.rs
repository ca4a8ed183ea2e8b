//! Domain types for the greeting gateway.
//!
//! Configuration, errors, the authenticated principal and the greeting rule
//! itself. Nothing here performs I/O.

pub mod config;
pub mod error;
pub mod greeting;
pub mod principal;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, GatewayError};
pub use greeting::{greet, GreetingResponse};
pub use principal::{AuthenticatedPrincipal, CredentialKind};
