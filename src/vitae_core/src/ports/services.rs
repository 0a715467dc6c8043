use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{AccountId, PasswordHash},
    password::Password,
};

#[derive(Debug, Error)]
#[error("Failed to hash password: {0}")]
pub struct HashingError(pub String);

/// One-way transform between plaintext secrets and stored hashes.
#[async_trait]
pub trait CredentialCodec: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordHash, HashingError>;

    /// `true` only if `candidate` matches `hash`. Every internal failure,
    /// including a malformed hash, is reported as `false`.
    async fn verify(&self, hash: PasswordHash, candidate: Password) -> bool;
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Signing key is empty")]
    EmptyKey,
    #[error("Token lifetime out of range")]
    Lifetime,
    #[error("Failed to encode token: {0}")]
    Encoding(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,
    #[error("Token has expired")]
    Expired,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: AccountId) -> Result<String, SigningError>;
}

/// Checks signature integrity first, then expiry.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<AccountId, TokenError>;
}
