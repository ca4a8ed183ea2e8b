//! Authentication port.
//!
//! The auth middleware depends on this trait only; credential formats live in
//! `crate::adapters`.

use crate::domain::principal::AuthenticatedPrincipal;
use axum::http::{header, HeaderMap};

/// Resolves a bearer token to a principal
pub trait Authenticator: Send + Sync {
    /// Validate `token` and return the caller it identifies.
    ///
    /// Implementations must never return a principal with an empty name.
    fn authenticate(&self, token: &str) -> Result<AuthenticatedPrincipal, AuthError>;
}

/// Reasons a request could not be authenticated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer credentials")]
    MissingCredentials,
    #[error("authorization scheme must be Bearer")]
    InvalidScheme,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token expired")]
    Expired,
    #[error("unknown token")]
    UnknownToken,
    #[error("token does not name a principal")]
    MissingPrincipalName,
}

impl AuthError {
    /// Rank used to pick the most informative error when several
    /// authenticators reject the same token.
    pub fn specificity(&self) -> u8 {
        match self {
            AuthError::MissingCredentials | AuthError::InvalidScheme => 0,
            AuthError::UnknownToken => 1,
            AuthError::InvalidToken(_) => 2,
            AuthError::Expired | AuthError::MissingPrincipalName => 3,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidScheme)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(AuthError::InvalidScheme)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    Ok(token)
}
