//! `GET /api/hello`

use crate::domain::greeting::{greet, GreetingResponse};
use crate::domain::principal::AuthenticatedPrincipal;

/// Greet the authenticated caller.
///
/// The principal is injected by the auth layer; this handler has no state and
/// no side effects.
pub async fn hello(principal: AuthenticatedPrincipal) -> GreetingResponse {
    greet(principal.name())
}
