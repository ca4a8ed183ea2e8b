//! Route table.
//!
//! Every endpoint is declared once here as `(method, path, access) → handler`
//! and folded into an axum [`Router`] at startup.

use crate::domain::error::ApiError;
use crate::handlers::{health_check, hello};
use crate::middleware::AuthLayer;
use axum::{
    handler::Handler,
    http::Uri,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use tracing::debug;

pub const HEALTH_PATH: &str = "/health";
pub const HELLO_PATH: &str = "/api/hello";

/// Who may call a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No credentials needed
    Public,
    /// Bearer credentials must resolve to a principal
    Authenticated,
}

/// One entry of the route table
pub struct Route {
    pub method: MethodFilter,
    pub path: &'static str,
    pub access: Access,
    handler: MethodRouter,
}

impl Route {
    pub fn new<H, T>(method: MethodFilter, path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        Self {
            method,
            path,
            access,
            handler: on(method, handler),
        }
    }
}

/// All routes served by the gateway
pub fn route_table() -> Vec<Route> {
    vec![
        Route::new(MethodFilter::GET, HEALTH_PATH, Access::Public, health_check),
        Route::new(MethodFilter::GET, HELLO_PATH, Access::Authenticated, hello),
    ]
}

/// Register every route, guarding authenticated ones with `auth`.
pub fn build_router(routes: Vec<Route>, auth: AuthLayer) -> Router {
    routes
        .into_iter()
        .fold(Router::new(), |router, route| {
            debug!(
                method = ?route.method,
                path = route.path,
                access = ?route.access,
                "Registering route"
            );

            let handler = match route.access {
                Access::Public => route.handler,
                Access::Authenticated => route.handler.route_layer(auth.clone()),
            };
            router.route(route.path, handler)
        })
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
