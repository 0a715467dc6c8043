use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitae_core::{AuthError, AuthErrorKind, ValidationError};

const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AuthApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthApiError::Auth(e) => match e.kind() {
                AuthErrorKind::AccountExists => StatusCode::CONFLICT,
                AuthErrorKind::InvalidCredentials => StatusCode::BAD_REQUEST,
                AuthErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
                AuthErrorKind::HashingFailure
                | AuthErrorKind::TokenIssuanceFailure
                | AuthErrorKind::DatabaseFailure
                | AuthErrorKind::PersistFailure => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = self.status();

        let error_message = match &self {
            AuthApiError::Auth(e) if e.kind().is_internal() => {
                tracing::error!(error = ?e, kind = ?e.kind(), "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AuthApiError::Auth(e @ AuthError::Unauthenticated(rejection)) => {
                tracing::info!(reason = %rejection, "Request rejected");
                e.to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<ValidationError> for AuthApiError {
    fn from(error: ValidationError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        AuthApiError::InvalidInput(rejection.body_text())
    }
}
