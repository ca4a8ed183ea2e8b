//! Tries several authenticators in order.

use crate::domain::principal::AuthenticatedPrincipal;
use crate::ports::{AuthError, Authenticator};
use std::sync::Arc;

/// First authenticator to accept the token wins. When all reject it, the
/// most specific error is reported.
pub struct ChainAuthenticator {
    authenticators: Vec<Arc<dyn Authenticator>>,
}

impl ChainAuthenticator {
    pub fn new(authenticators: Vec<Arc<dyn Authenticator>>) -> Self {
        Self { authenticators }
    }

    pub fn len(&self) -> usize {
        self.authenticators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authenticators.is_empty()
    }
}

impl Authenticator for ChainAuthenticator {
    fn authenticate(&self, token: &str) -> Result<AuthenticatedPrincipal, AuthError> {
        let mut best = AuthError::UnknownToken;

        for authenticator in &self.authenticators {
            match authenticator.authenticate(token) {
                Ok(principal) => return Ok(principal),
                Err(e) if e.specificity() > best.specificity() => best = e,
                Err(_) => {}
            }
        }

        Err(best)
    }
}
