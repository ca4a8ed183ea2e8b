//! Authentication middleware.
//!
//! Resolves the caller from the bearer token and stores the
//! [`AuthenticatedPrincipal`] in request extensions. Requests that cannot be
//! authenticated are answered with 401 and never reach the inner service.

use crate::domain::error::ApiError;
use crate::domain::principal::AuthenticatedPrincipal;
use crate::ports::{bearer_token, AuthError, Authenticator};
use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::{debug, warn};

/// Authentication layer
#[derive(Clone)]
pub struct AuthLayer {
    authenticator: Arc<dyn Authenticator>,
}

impl AuthLayer {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService<S> {
    inner: S,
    authenticator: Arc<dyn Authenticator>,
}

impl<S> Service<Request<Body>> for AuthService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let authenticator = Arc::clone(&self.authenticator);
        // Keep the service that was driven to readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match authenticate_request(&req, authenticator.as_ref()) {
                Ok(principal) => {
                    debug!(
                        principal = principal.name(),
                        credential = %principal.credential(),
                        "Request authenticated"
                    );
                    req.extensions_mut().insert(principal);
                    inner.call(req).await
                }
                Err(e) => {
                    warn!(
                        method = %req.method(),
                        path = req.uri().path(),
                        reason = %e,
                        "Authentication failed"
                    );
                    Ok(unauthorized_response(&e))
                }
            }
        })
    }
}

/// Resolve the principal for a request
fn authenticate_request<B>(
    req: &Request<B>,
    authenticator: &dyn Authenticator,
) -> Result<AuthenticatedPrincipal, AuthError> {
    let token = bearer_token(req.headers())?;
    let principal = authenticator.authenticate(token)?;

    if principal.name().is_empty() {
        return Err(AuthError::MissingPrincipalName);
    }

    Ok(principal)
}

/// Create unauthorized response
fn unauthorized_response(error: &AuthError) -> Response {
    ApiError::unauthorized(error.to_string()).into_response()
}
