use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use vitae_core::{Account, AccountId, Email, IdentityStore, NewAccount, StoreError};

#[derive(Default, Clone)]
pub struct HashMapIdentityStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    last_id: Arc<AtomicI64>,
}

impl HashMapIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait::async_trait]
impl IdentityStore for HashMapIdentityStore {
    #[tracing::instrument(name = "Finding account in hashmap store", skip_all)]
    async fn find_by_handle(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    #[tracing::instrument(name = "Adding account to hashmap store", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<AccountId, StoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(StoreError::Conflict);
        }

        let id = AccountId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        accounts.insert(account.email().clone(), account.with_id(id));
        Ok(id)
    }
}
