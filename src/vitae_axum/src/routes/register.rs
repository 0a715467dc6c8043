//! Axum-specific register route.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use vitae_application::RegisterUseCase;
use vitae_core::{AccountId, CredentialCodec, Email, IdentityStore, Password};

use crate::error::AuthApiError;

/// Request body for registration.
///
/// Profile fields sent alongside the credentials are validated and stored by
/// the profile service, so they are ignored here.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: AccountId,
}

/// POST /auth/register
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, C>(
    State((identity_store, codec)): State<(S, C)>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: IdentityStore + Clone + 'static,
    C: CredentialCodec + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::parse(&request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = RegisterUseCase::new(&identity_store, &codec);
    let id = use_case.execute(email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created successfully".to_string(),
            id,
        }),
    ))
}
