//! Access gate middleware for protected routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use vitae_application::AccessGate;
use vitae_core::TokenVerifier;

use crate::error::AuthApiError;

/// Verifies the bearer token and attaches the proven
/// [`AuthenticatedSubject`](vitae_core::AuthenticatedSubject) to the request
/// extensions before handing over to the next service. Any failure stops the
/// request with 401.
///
/// Mount with `axum::middleware::from_fn_with_state(gate, require_auth::<V>)`.
pub async fn require_auth<V>(
    State(gate): State<AccessGate<V>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthApiError>
where
    V: TokenVerifier + Clone + 'static,
{
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.as_bytes());

    let subject = gate.authenticate(authorization)?;
    tracing::debug!(account_id = %subject.account_id, "Request authenticated");

    request.extensions_mut().insert(subject);
    Ok(next.run(request).await)
}
