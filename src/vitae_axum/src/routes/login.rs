//! Axum-specific login route.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use vitae_application::LoginUseCase;
use vitae_core::{
    AuthError, CredentialCodec, CredentialRejection, Email, IdentityStore, Password, TokenIssuer,
};

use crate::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /auth/login
///
/// A syntactically invalid email cannot belong to an account, so it is
/// refused exactly like an unknown one.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, C, T>(
    State((identity_store, codec, token_issuer)): State<(S, C, T)>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: IdentityStore + Clone + 'static,
    C: CredentialCodec + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::parse(&request.email)
        .map_err(|_| AuthError::invalid_credentials(CredentialRejection::UnknownHandle))?;
    let password = Password::candidate(request.password);

    let use_case = LoginUseCase::new(&identity_store, &codec, &token_issuer);
    let token = use_case.execute(email, password).await?;

    Ok((StatusCode::OK, Json(LoginResponse { token })))
}
