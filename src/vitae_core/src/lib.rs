pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, NewAccount, PasswordHash},
    email::Email,
    password::Password,
    subject::AuthenticatedSubject,
    validation::ValidationError,
};

pub use error::{AuthError, AuthErrorKind, CredentialRejection, GateRejection};

pub use ports::{
    repositories::{IdentityStore, StoreError},
    services::{CredentialCodec, HashingError, SigningError, TokenError, TokenIssuer, TokenVerifier},
};
