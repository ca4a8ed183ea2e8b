//! The authenticated caller of a request.
//!
//! Principals are produced only by the authentication layer and handed to
//! handlers through request extensions.

use crate::domain::error::ApiError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::fmt;

/// Credential that established a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Signed JWT bearer token
    Jwt,
    /// Opaque token from the static token table
    StaticToken,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::Jwt => write!(f, "jwt"),
            CredentialKind::StaticToken => write!(f, "static_token"),
        }
    }
}

/// Identity resolved for one request. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    name: String,
    credential: CredentialKind,
}

impl AuthenticatedPrincipal {
    pub fn new(name: impl Into<String>, credential: CredentialKind) -> Self {
        Self {
            name: name.into(),
            credential,
        }
    }

    /// Display name of the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credential(&self) -> CredentialKind {
        self.credential
    }
}

/// Pulls the principal placed by the auth layer.
///
/// A route wired without the auth layer has no principal; the request is
/// rejected with 401 before the handler body runs.
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedPrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("no authenticated principal"))
    }
}
