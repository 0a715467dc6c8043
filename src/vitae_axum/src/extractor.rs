//! Typed access to the subject attached by [`require_auth`](crate::require_auth).

use axum::{extract::FromRequestParts, http::request::Parts};
use vitae_core::{AuthError, AuthenticatedSubject, GateRejection};

use crate::error::AuthApiError;

/// Newtype around [`AuthenticatedSubject`] so Axum's extractor trait can be
/// implemented here without violating the orphan rule.
///
/// Used on a route that is not behind the gate, it rejects with 401 instead
/// of panicking.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSubject(pub AuthenticatedSubject);

impl<S> FromRequestParts<S> for CurrentSubject
where
    S: Send + Sync,
{
    type Rejection = AuthApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedSubject>()
            .copied()
            .map(CurrentSubject)
            .ok_or(AuthApiError::Auth(AuthError::Unauthenticated(
                GateRejection::MissingHeader,
            )))
    }
}
