//! Adapters for the API Gateway.
//!
//! Concrete credential formats behind the [`Authenticator`] port.

pub mod chain;
pub mod jwt;
pub mod static_token;

pub use chain::ChainAuthenticator;
pub use jwt::JwtAuthenticator;
pub use static_token::{constant_time_compare, StaticTokenAuthenticator};

use crate::domain::config::AuthConfig;
use crate::domain::error::GatewayError;
use crate::ports::Authenticator;
use std::sync::Arc;
use tracing::info;

/// Build the authenticator chain for the configured credential sources.
///
/// Static tokens are consulted before JWTs.
pub fn build_authenticator(config: &AuthConfig) -> Result<Arc<dyn Authenticator>, GatewayError> {
    let mut authenticators: Vec<Arc<dyn Authenticator>> = Vec::new();

    if !config.static_tokens.is_empty() {
        info!(
            count = config.static_tokens.len(),
            "Static bearer tokens enabled"
        );
        authenticators.push(Arc::new(StaticTokenAuthenticator::new(
            config.static_tokens.clone(),
        )));
    }

    if let Some(jwt) = &config.jwt {
        info!(
            algorithm = %jwt.algorithm,
            issuer = jwt.issuer.as_deref().unwrap_or("<any>"),
            principal_claim = %jwt.principal_claim,
            "JWT bearer authentication enabled"
        );
        authenticators.push(Arc::new(JwtAuthenticator::from_config(jwt)?));
    }

    Ok(Arc::new(ChainAuthenticator::new(authenticators)))
}
