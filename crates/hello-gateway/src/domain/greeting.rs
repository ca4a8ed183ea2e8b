//! The greeting rule: `"Hello "` followed by the principal name, verbatim.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Literal prefix of every greeting
pub const GREETING_PREFIX: &str = "Hello ";

/// Plain-text success response carrying a greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingResponse {
    body: String,
}

impl GreetingResponse {
    pub fn status(&self) -> StatusCode {
        StatusCode::OK
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Build the greeting for `name`.
///
/// The name is not trimmed, escaped or validated. An empty name yields
/// `"Hello "`.
pub fn greet(name: &str) -> GreetingResponse {
    let mut body = String::with_capacity(GREETING_PREFIX.len() + name.len());
    body.push_str(GREETING_PREFIX);
    body.push_str(name);
    GreetingResponse { body }
}

impl IntoResponse for GreetingResponse {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body,
        )
            .into_response()
    }
}
