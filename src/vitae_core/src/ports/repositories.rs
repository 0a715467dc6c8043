use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId, NewAccount},
    email::Email,
};

// IdentityStore port trait and errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Account already exists")]
    Conflict,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Conflict, Self::Conflict) | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence contract for accounts.
///
/// A missing account is `Ok(None)`, never an error. Handle uniqueness is the
/// store's responsibility; `create` reports a duplicate as
/// [`StoreError::Conflict`].
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_handle(&self, email: &Email) -> Result<Option<Account>, StoreError>;
    async fn create(&self, account: NewAccount) -> Result<AccountId, StoreError>;
}
