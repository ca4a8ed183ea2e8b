//! Signed JWT bearer tokens issued by an OpenID Connect provider.

use crate::domain::config::JwtConfig;
use crate::domain::error::GatewayError;
use crate::domain::principal::{AuthenticatedPrincipal, CredentialKind};
use crate::ports::{AuthError, Authenticator};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

/// Validates JWT signature, expiry and (optionally) issuer and audience,
/// then reads the principal name from a configurable claim.
pub struct JwtAuthenticator {
    key: DecodingKey,
    validation: Validation,
    principal_claim: String,
    fallback_to_subject: bool,
}

impl JwtAuthenticator {
    /// Build from configuration, loading key material.
    pub fn from_config(config: &JwtConfig) -> Result<Self, GatewayError> {
        let algorithm = config.algorithm()?;

        let key = match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
                let secret = config
                    .secret
                    .as_deref()
                    .ok_or_else(|| GatewayError::Auth("missing HMAC secret".into()))?;
                DecodingKey::from_secret(secret.as_bytes())
            }
            _ => {
                let pem = config
                    .public_key_pem
                    .as_deref()
                    .ok_or_else(|| GatewayError::Auth("missing RSA public key".into()))?;
                DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| GatewayError::Auth(format!("invalid RSA public key: {}", e)))?
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = config.leeway_secs;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self {
            key,
            validation,
            principal_claim: config.principal_claim.clone(),
            fallback_to_subject: config.fallback_to_subject,
        })
    }

    fn principal_name(&self, claims: &Map<String, Value>) -> Option<String> {
        let non_empty = |claim: &str| {
            claims
                .get(claim)
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(String::from)
        };

        non_empty(&self.principal_claim).or_else(|| {
            if self.fallback_to_subject {
                non_empty("sub")
            } else {
                None
            }
        })
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, token: &str) -> Result<AuthenticatedPrincipal, AuthError> {
        let data = jsonwebtoken::decode::<Map<String, Value>>(token, &self.key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        let name = self
            .principal_name(&data.claims)
            .ok_or(AuthError::MissingPrincipalName)?;

        Ok(AuthenticatedPrincipal::new(name, CredentialKind::Jwt))
    }
}
