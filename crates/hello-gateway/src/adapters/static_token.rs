//! Opaque bearer tokens mapped to fixed principal names.

use crate::domain::config::StaticToken;
use crate::domain::principal::{AuthenticatedPrincipal, CredentialKind};
use crate::ports::{AuthError, Authenticator};

/// Authenticator backed by a configured token table
pub struct StaticTokenAuthenticator {
    tokens: Vec<StaticToken>,
}

impl StaticTokenAuthenticator {
    pub fn new(tokens: Vec<StaticToken>) -> Self {
        Self { tokens }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> Result<AuthenticatedPrincipal, AuthError> {
        // Every entry is compared so the match position does not affect timing.
        let mut matched: Option<&StaticToken> = None;
        for entry in &self.tokens {
            if constant_time_compare(token, &entry.token) {
                matched = Some(entry);
            }
        }

        let entry = matched.ok_or(AuthError::UnknownToken)?;
        if entry.principal.is_empty() {
            return Err(AuthError::MissingPrincipalName);
        }

        Ok(AuthenticatedPrincipal::new(
            entry.principal.clone(),
            CredentialKind::StaticToken,
        ))
    }
}

/// Constant-time string comparison to prevent timing attacks
///
/// Both inputs are padded to the longer length with different fill bytes, so
/// a length mismatch still costs a full comparison and never compares equal.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    use subtle::ConstantTimeEq;

    let max_len = std::cmp::max(a.len(), b.len());

    let mut a_padded = vec![0u8; max_len];
    let mut b_padded = vec![0xFFu8; max_len];

    a_padded[..a.len()].copy_from_slice(a.as_bytes());
    b_padded[..b.len()].copy_from_slice(b.as_bytes());

    let lengths_equal = a.len().ct_eq(&b.len());
    let contents_equal = a_padded.ct_eq(&b_padded);

    (lengths_equal & contents_equal).into()
}
