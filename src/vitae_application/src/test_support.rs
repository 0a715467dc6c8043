//! In-memory collaborators shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use vitae_core::{
    Account, AccountId, CredentialCodec, Email, HashingError, IdentityStore, NewAccount, Password,
    PasswordHash, SigningError, StoreError, TokenIssuer,
};

#[derive(Clone, Default)]
pub struct MockIdentityStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    next_id: Arc<AtomicI64>,
    fail_lookups: bool,
    fail_creates: bool,
}

impl MockIdentityStore {
    pub fn failing_lookups() -> Self {
        Self {
            fail_lookups: true,
            ..Self::default()
        }
    }

    pub fn failing_creates() -> Self {
        Self {
            fail_creates: true,
            ..Self::default()
        }
    }

    pub async fn insert(&self, email: Email, hash: &str) -> AccountId {
        let id = AccountId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let hash = PasswordHash::new(Secret::from(hash.to_string()));
        self.accounts
            .write()
            .await
            .insert(email.clone(), Account::new(id, email, hash));
        id
    }

    pub async fn account(&self, email: &Email) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl IdentityStore for MockIdentityStore {
    async fn find_by_handle(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        if self.fail_lookups {
            return Err(StoreError::UnexpectedError("connection reset".to_string()));
        }
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<AccountId, StoreError> {
        if self.fail_creates {
            return Err(StoreError::UnexpectedError("disk full".to_string()));
        }
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(StoreError::Conflict);
        }
        let id = AccountId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        accounts.insert(account.email().clone(), account.with_id(id));
        Ok(id)
    }
}

/// Reversible stand-in for a real hash: `hashed:<secret>`.
pub struct MockCodec;

#[async_trait]
impl CredentialCodec for MockCodec {
    async fn hash(&self, password: Password) -> Result<PasswordHash, HashingError> {
        let phc = format!("hashed:{}", password.as_ref().expose_secret());
        Ok(PasswordHash::new(Secret::from(phc)))
    }

    async fn verify(&self, hash: PasswordHash, candidate: Password) -> bool {
        hash.as_str()
            .strip_prefix("hashed:")
            .is_some_and(|secret| secret == candidate.as_ref().expose_secret())
    }
}

pub struct FailingCodec;

#[async_trait]
impl CredentialCodec for FailingCodec {
    async fn hash(&self, _password: Password) -> Result<PasswordHash, HashingError> {
        Err(HashingError("out of memory".to_string()))
    }

    async fn verify(&self, _hash: PasswordHash, _candidate: Password) -> bool {
        false
    }
}

pub struct MockIssuer;

impl TokenIssuer for MockIssuer {
    fn issue(&self, subject: AccountId) -> Result<String, SigningError> {
        Ok(format!("token-for-{subject}"))
    }
}

pub struct FailingIssuer;

impl TokenIssuer for FailingIssuer {
    fn issue(&self, _subject: AccountId) -> Result<String, SigningError> {
        Err(SigningError::EmptyKey)
    }
}
