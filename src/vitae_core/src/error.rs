use thiserror::Error;

use crate::ports::{
    repositories::StoreError,
    services::{HashingError, SigningError, TokenError},
};

/// Discriminant used at the HTTP boundary to choose a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    AccountExists,
    InvalidCredentials,
    HashingFailure,
    TokenIssuanceFailure,
    DatabaseFailure,
    PersistFailure,
    Unauthenticated,
}

impl AuthErrorKind {
    /// Faults of the server or its collaborators, as opposed to outcomes
    /// caused by the caller's input.
    pub fn is_internal(self) -> bool {
        matches!(
            self,
            Self::HashingFailure
                | Self::TokenIssuanceFailure
                | Self::DatabaseFailure
                | Self::PersistFailure
        )
    }
}

/// Why a login was refused. Only ever logged; both reasons produce the same
/// external error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRejection {
    UnknownHandle,
    WrongSecret,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateRejection {
    #[error("Missing authorization header")]
    MissingHeader,
    #[error("Malformed authorization header")]
    MalformedHeader,
    #[error(transparent)]
    Token(#[from] TokenError),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Account already exists")]
    AccountExists,
    #[error("Invalid credentials")]
    InvalidCredentials { reason: CredentialRejection },
    #[error("Password hashing failed")]
    HashingFailure(#[source] HashingError),
    #[error("Token issuance failed")]
    TokenIssuanceFailure(#[source] SigningError),
    #[error("Database error")]
    DatabaseFailure(#[source] StoreError),
    #[error("Failed to persist account")]
    PersistFailure(#[source] StoreError),
    #[error("Unauthenticated")]
    Unauthenticated(#[source] GateRejection),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::AccountExists => AuthErrorKind::AccountExists,
            Self::InvalidCredentials { .. } => AuthErrorKind::InvalidCredentials,
            Self::HashingFailure(_) => AuthErrorKind::HashingFailure,
            Self::TokenIssuanceFailure(_) => AuthErrorKind::TokenIssuanceFailure,
            Self::DatabaseFailure(_) => AuthErrorKind::DatabaseFailure,
            Self::PersistFailure(_) => AuthErrorKind::PersistFailure,
            Self::Unauthenticated(_) => AuthErrorKind::Unauthenticated,
        }
    }

    pub fn invalid_credentials(reason: CredentialRejection) -> Self {
        Self::InvalidCredentials { reason }
    }
}
