//! Gateway configuration with validation.
//!
//! Every section is `#[serde(default)]` so partial documents deserialize.
//! [`GatewayConfig::from_env`] reads `HELLO_GATEWAY_*` variables on top of
//! the defaults.

use jsonwebtoken::Algorithm;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Prefix for every environment variable the gateway reads
pub const ENV_PREFIX: &str = "HELLO_GATEWAY_";

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Credential sources accepted by the authentication layer
    pub auth: AuthConfig,
    /// CORS configuration for the browser frontend
    pub cors: CorsConfig,
    /// Log output configuration
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.http.request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request_timeout cannot be 0".into(),
            ));
        }

        self.auth.validate()
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `HELLO_GATEWAY_HOST` / `HELLO_GATEWAY_PORT`: bind address (default 0.0.0.0:8080)
    /// - `HELLO_GATEWAY_REQUEST_TIMEOUT_SECS`: per-request timeout (default 10)
    /// - `HELLO_GATEWAY_JWT_SECRET`: HMAC secret, enables JWT auth
    /// - `HELLO_GATEWAY_JWT_PUBLIC_KEY`: PEM public key, enables JWT auth
    /// - `HELLO_GATEWAY_JWT_ALGORITHM`: HS256/384/512 or RS256/384/512
    /// - `HELLO_GATEWAY_JWT_ISSUER` / `HELLO_GATEWAY_JWT_AUDIENCE`: expected `iss` / `aud`
    /// - `HELLO_GATEWAY_JWT_PRINCIPAL_CLAIM`: claim holding the user name (default preferred_username)
    /// - `HELLO_GATEWAY_JWT_FALLBACK_TO_SUBJECT`: use `sub` when the claim is absent (default true)
    /// - `HELLO_GATEWAY_JWT_LEEWAY_SECS`: clock skew allowance for `exp` (default 60)
    /// - `HELLO_GATEWAY_STATIC_TOKENS`: `token=name,token2=name2`
    /// - `HELLO_GATEWAY_CORS_ORIGINS`: comma separated origins (default *)
    /// - `HELLO_GATEWAY_LOG_LEVEL`: log filter (default info). `RUST_LOG`, when
    ///   set, takes precedence over it (see [`crate::telemetry::env_filter`]).
    /// - `HELLO_GATEWAY_JSON_LOGS`: emit JSON log lines (default false)
    ///
    /// Flags accept `true/false`, `1/0`, `yes/no` and `on/off`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// A value that is present but does not parse is an error, never a
    /// silent fallback to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        let mut config = Self::default();

        if let Some(host) = parse_var(&var, "HOST")? {
            config.http.host = host;
        }
        if let Some(port) = parse_var(&var, "PORT")? {
            config.http.port = port;
        }
        if let Some(secs) = parse_var(&var, "REQUEST_TIMEOUT_SECS")? {
            config.http.request_timeout = Duration::from_secs(secs);
        }

        let secret = var("JWT_SECRET");
        let public_key_pem = var("JWT_PUBLIC_KEY");
        if secret.is_some() || public_key_pem.is_some() {
            let mut jwt = JwtConfig::default();
            jwt.algorithm = var("JWT_ALGORITHM").unwrap_or_else(|| {
                if secret.is_some() {
                    "HS256".to_string()
                } else {
                    "RS256".to_string()
                }
            });
            jwt.secret = secret;
            jwt.public_key_pem = public_key_pem;
            jwt.issuer = var("JWT_ISSUER");
            jwt.audience = var("JWT_AUDIENCE");
            if let Some(claim) = var("JWT_PRINCIPAL_CLAIM") {
                jwt.principal_claim = claim;
            }
            if let Some(fallback) = parse_flag(&var, "JWT_FALLBACK_TO_SUBJECT")? {
                jwt.fallback_to_subject = fallback;
            }
            if let Some(leeway) = parse_var(&var, "JWT_LEEWAY_SECS")? {
                jwt.leeway_secs = leeway;
            }
            config.auth.jwt = Some(jwt);
        }

        if let Some(tokens) = var("STATIC_TOKENS") {
            config.auth.static_tokens = parse_static_tokens(&tokens);
        }

        if let Some(origins) = var("CORS_ORIGINS") {
            config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = parse_flag(&var, "JSON_LOGS")? {
            config.logging.json = json;
        }

        Ok(config)
    }
}

fn invalid_env(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnv {
        key: format!("{}{}", ENV_PREFIX, name),
        value,
    }
}

/// Parse `name` if set; a present but malformed value is an error.
fn parse_var<V, T>(var: &V, name: &str) -> Result<Option<T>, ConfigError>
where
    V: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(invalid_env(name, raw)),
        },
        None => Ok(None),
    }
}

fn parse_flag<V>(var: &V, name: &str) -> Result<Option<bool>, ConfigError>
where
    V: Fn(&str) -> Option<String>,
{
    let Some(raw) = var(name) else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(invalid_env(name, raw)),
    }
}

/// Parse `token=name` pairs separated by commas. Malformed pairs are skipped.
fn parse_static_tokens(raw: &str) -> Vec<StaticToken> {
    raw.split(',')
        .filter_map(|pair| {
            let (token, principal) = pair.split_once('=')?;
            Some(StaticToken {
                token: token.trim().to_string(),
                principal: principal.trim().to_string(),
            })
        })
        .collect()
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8080)
    pub port: u16,
    /// Upper bound on the time spent serving one request
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8080,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Credential sources. At least one must be configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Signed bearer tokens issued by an identity provider
    pub jwt: Option<JwtConfig>,
    /// Opaque bearer tokens mapped to fixed principal names
    pub static_tokens: Vec<StaticToken>,
}

impl AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.is_none() && self.static_tokens.is_empty() {
            return Err(ConfigError::NoCredentialSource);
        }

        if let Some(jwt) = &self.jwt {
            jwt.validate()?;
        }

        let mut seen = HashSet::new();
        for entry in &self.static_tokens {
            if entry.token.is_empty() {
                return Err(ConfigError::InvalidAuth("static token cannot be empty".into()));
            }
            if entry.principal.is_empty() {
                return Err(ConfigError::InvalidAuth(
                    "static token principal cannot be empty".into(),
                ));
            }
            if !seen.insert(entry.token.as_str()) {
                return Err(ConfigError::InvalidAuth("duplicate static token".into()));
            }
        }

        Ok(())
    }
}

/// JWT validation settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Signing algorithm name (HS256, HS384, HS512, RS256, RS384, RS512)
    pub algorithm: String,
    /// Shared secret for HS* algorithms
    pub secret: Option<String>,
    /// PEM encoded public key for RS* algorithms
    pub public_key_pem: Option<String>,
    /// Required `iss` claim
    pub issuer: Option<String>,
    /// Required `aud` claim
    pub audience: Option<String>,
    /// Claim carrying the principal name
    pub principal_claim: String,
    /// Use `sub` when `principal_claim` is absent
    pub fallback_to_subject: bool,
    /// Clock skew allowance applied to `exp`
    pub leeway_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            algorithm: "RS256".to_string(),
            secret: None,
            public_key_pem: None,
            issuer: None,
            audience: None,
            principal_claim: "preferred_username".to_string(),
            fallback_to_subject: true,
            leeway_secs: 60,
        }
    }
}

impl JwtConfig {
    /// Parsed signing algorithm
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        let algorithm: Algorithm = self
            .algorithm
            .parse()
            .map_err(|_| ConfigError::InvalidAuth(format!("unknown algorithm {}", self.algorithm)))?;

        match algorithm {
            Algorithm::HS256
            | Algorithm::HS384
            | Algorithm::HS512
            | Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512 => Ok(algorithm),
            other => Err(ConfigError::InvalidAuth(format!(
                "unsupported algorithm {:?}",
                other
            ))),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.algorithm()? {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
                if self.secret.as_deref().unwrap_or_default().is_empty() {
                    return Err(ConfigError::InvalidAuth(
                        "HMAC algorithms require a secret".into(),
                    ));
                }
            }
            _ => {
                if self.public_key_pem.as_deref().unwrap_or_default().is_empty() {
                    return Err(ConfigError::InvalidAuth(
                        "RSA algorithms require a public key".into(),
                    ));
                }
            }
        }

        if self.principal_claim.is_empty() {
            return Err(ConfigError::InvalidAuth(
                "principal_claim cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("algorithm", &self.algorithm)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("public_key_pem", &self.public_key_pem.is_some())
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("principal_claim", &self.principal_claim)
            .field("fallback_to_subject", &self.fallback_to_subject)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// Opaque bearer token bound to a principal name
#[derive(Clone, Serialize, Deserialize)]
pub struct StaticToken {
    pub token: String,
    pub principal: String,
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"<redacted>")
            .field("principal", &self.principal)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
            max_age: 86400, // 24 hours
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `hello_gateway=debug`
    pub level: String,
    /// Emit JSON formatted lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Port 0 would bind an ephemeral port
    #[error("http port cannot be 0")]
    InvalidPort,
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    /// Neither JWT nor static tokens configured
    #[error("no credential source configured (set a JWT key or static tokens)")]
    NoCredentialSource,
    /// Invalid authentication settings
    #[error("invalid auth configuration: {0}")]
    InvalidAuth(String),
    /// Environment variable set to a value that does not parse
    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: String, value: String },
}

/// Humantime serde module for Duration serialization
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = if duration.subsec_nanos() == 0 {
            format!("{}s", duration.as_secs())
        } else {
            format!("{}ms", duration.as_millis())
        };
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_duration(s: &str) -> Result<Duration, &'static str> {
        let s = s.trim();
        if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| "invalid milliseconds")
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid seconds")
        } else if let Some(mins) = s.strip_suffix('m') {
            let mins = mins.trim().parse::<u64>().map_err(|_| "invalid minutes")?;
            mins.checked_mul(60)
                .map(Duration::from_secs)
                .ok_or("minutes out of range")
        } else {
            s.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid duration format")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_static_token() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.auth.static_tokens.push(StaticToken {
            token: "dev-token".to_string(),
            principal: "alice".to_string(),
        });
        config
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_has_no_credentials() {
        let config = GatewayConfig::default();
        assert_eq!(config.http.port, 8080);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoCredentialSource)
        ));
    }

    #[test]
    fn test_static_token_config_is_valid() {
        assert!(with_static_token().validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = with_static_token();
        config.http.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = with_static_token();
        config.http.request_timeout = Duration::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_duplicate_static_tokens_rejected() {
        let mut config = with_static_token();
        config.auth.static_tokens.push(StaticToken {
            token: "dev-token".to_string(),
            principal: "bob".to_string(),
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAuth(_))
        ));
    }

    #[test]
    fn test_hmac_requires_secret() {
        let mut config = GatewayConfig::default();
        config.auth.jwt = Some(JwtConfig {
            algorithm: "HS256".to_string(),
            ..JwtConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAuth(_))
        ));
    }

    #[test]
    fn test_rsa_requires_public_key() {
        let mut config = GatewayConfig::default();
        config.auth.jwt = Some(JwtConfig {
            secret: Some("irrelevant".to_string()),
            ..JwtConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAuth(_))
        ));
    }

    #[test]
    fn test_unsupported_algorithm_rejected() {
        let jwt = JwtConfig {
            algorithm: "ES256".to_string(),
            ..JwtConfig::default()
        };
        assert!(jwt.algorithm().is_err());

        let jwt = JwtConfig {
            algorithm: "none".to_string(),
            ..JwtConfig::default()
        };
        assert!(jwt.algorithm().is_err());
    }

    #[test]
    fn test_config_address() {
        let config = GatewayConfig::default();
        assert_eq!(config.http_addr().port(), 8080);
    }

    #[test]
    fn test_from_lookup_jwt_secret_defaults_to_hs256() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("HELLO_GATEWAY_PORT", "9090"),
            ("HELLO_GATEWAY_JWT_SECRET", "s3cret"),
            ("HELLO_GATEWAY_JWT_ISSUER", "https://idp.example.com/realms/demo"),
        ]))
        .unwrap();

        assert_eq!(config.http.port, 9090);
        let jwt = config.auth.jwt.as_ref().unwrap();
        assert_eq!(jwt.algorithm, "HS256");
        assert_eq!(jwt.issuer.as_deref(), Some("https://idp.example.com/realms/demo"));
        assert_eq!(jwt.principal_claim, "preferred_username");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_static_tokens() {
        let config = GatewayConfig::from_lookup(lookup(&[(
            "HELLO_GATEWAY_STATIC_TOKENS",
            "t1=alice, t2 = O'Brien,garbage",
        )]))
        .unwrap();

        let tokens = &config.auth.static_tokens;
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].token, "t1");
        assert_eq!(tokens[0].principal, "alice");
        assert_eq!(tokens[1].token, "t2");
        assert_eq!(tokens[1].principal, "O'Brien");
        assert!(config.auth.jwt.is_none());
    }

    #[test]
    fn test_from_lookup_logging() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("RUST_LOG", "trace"),
            ("HELLO_GATEWAY_LOG_LEVEL", "debug"),
            ("HELLO_GATEWAY_JSON_LOGS", "1"),
        ]))
        .unwrap();
        // RUST_LOG is applied by the subscriber, not stored in config
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_from_lookup_rejects_bad_port() {
        let result = GatewayConfig::from_lookup(lookup(&[("HELLO_GATEWAY_PORT", "http")]));
        match result {
            Err(ConfigError::InvalidEnv { key, value }) => {
                assert_eq!(key, "HELLO_GATEWAY_PORT");
                assert_eq!(value, "http");
            }
            other => panic!("expected InvalidEnv, got {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_rejects_hostname() {
        // Falling back to 0.0.0.0 would expose every interface
        let result = GatewayConfig::from_lookup(lookup(&[("HELLO_GATEWAY_HOST", "localhost")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        for (key, value) in [
            ("HELLO_GATEWAY_REQUEST_TIMEOUT_SECS", "ten"),
            ("HELLO_GATEWAY_JWT_LEEWAY_SECS", "-5"),
        ] {
            let result = GatewayConfig::from_lookup(lookup(&[
                ("HELLO_GATEWAY_JWT_SECRET", "s3cret"),
                (key, value),
            ]));
            assert!(
                matches!(result, Err(ConfigError::InvalidEnv { .. })),
                "{} = {} was accepted",
                key,
                value
            );
        }
    }

    #[test]
    fn test_from_lookup_flags() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("HELLO_GATEWAY_JWT_SECRET", "s3cret"),
            ("HELLO_GATEWAY_JWT_FALLBACK_TO_SUBJECT", "yes"),
            ("HELLO_GATEWAY_JSON_LOGS", "On"),
        ]))
        .unwrap();
        assert!(config.auth.jwt.unwrap().fallback_to_subject);
        assert!(config.logging.json);

        let config = GatewayConfig::from_lookup(lookup(&[
            ("HELLO_GATEWAY_JWT_SECRET", "s3cret"),
            ("HELLO_GATEWAY_JWT_FALLBACK_TO_SUBJECT", "off"),
        ]))
        .unwrap();
        assert!(!config.auth.jwt.unwrap().fallback_to_subject);

        let result = GatewayConfig::from_lookup(lookup(&[("HELLO_GATEWAY_JSON_LOGS", "maybe")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
    }

    #[test]
    fn test_sub_second_timeout_round_trips() {
        let mut config = with_static_token();
        config.http.request_timeout = Duration::from_millis(500);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["http"]["request_timeout"], "500ms");

        let back: GatewayConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.http.request_timeout, Duration::from_millis(500));
        assert!(back.validate().is_ok());
    }

    #[test]
    fn test_whole_second_timeout_serializes_as_seconds() {
        let config = with_static_token();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["http"]["request_timeout"], "10s");
    }

    #[test]
    fn test_huge_minute_count_rejected() {
        assert_eq!(
            humantime_serde::parse_duration("307445734561825861m"),
            Err("minutes out of range")
        );
        assert_eq!(
            humantime_serde::parse_duration("2m"),
            Ok(Duration::from_secs(120))
        );
    }

    #[test]
    fn test_partial_json_document() {
        let config: GatewayConfig = serde_json::from_value(serde_json::json!({
            "http": { "port": 3000, "request_timeout": "500ms" },
            "auth": { "static_tokens": [{ "token": "t", "principal": "p" }] }
        }))
        .unwrap();

        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.request_timeout, Duration::from_millis(500));
        assert!(config.cors.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_duration_units() {
        use humantime_serde::parse_duration;
        assert_eq!(parse_duration("15s").unwrap(), Duration::from_secs(15));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("7").unwrap(), Duration::from_secs(7));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let jwt = JwtConfig {
            algorithm: "HS256".to_string(),
            secret: Some("top-secret".to_string()),
            ..JwtConfig::default()
        };
        let token = StaticToken {
            token: "hunter2".to_string(),
            principal: "alice".to_string(),
        };
        assert!(!format!("{:?}", jwt).contains("top-secret"));
        assert!(!format!("{:?}", token).contains("hunter2"));
    }
}
