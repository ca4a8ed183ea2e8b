//! Ports (trait seams) for the gateway.

pub mod authenticator;

pub use authenticator::{bearer_token, AuthError, Authenticator};
