use vitae_core::{
    AccountId, AuthError, CredentialCodec, Email, IdentityStore, NewAccount, Password, StoreError,
};

/// Register use case - creates an account for an unused handle
pub struct RegisterUseCase<'a, S, C>
where
    S: IdentityStore,
    C: CredentialCodec,
{
    identity_store: &'a S,
    codec: &'a C,
}

impl<'a, S, C> RegisterUseCase<'a, S, C>
where
    S: IdentityStore,
    C: CredentialCodec,
{
    pub fn new(identity_store: &'a S, codec: &'a C) -> Self {
        Self {
            identity_store,
            codec,
        }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Validated password, hashed before it reaches the store
    ///
    /// # Returns
    /// The id assigned by the identity store. No token is issued here; the
    /// caller logs in as a separate step.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<AccountId, AuthError> {
        let existing = self
            .identity_store
            .find_by_handle(&email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity store lookup failed");
                AuthError::DatabaseFailure(e)
            })?;

        if existing.is_some() {
            tracing::info!("Registration refused, handle already taken");
            return Err(AuthError::AccountExists);
        }

        let password_hash = self.codec.hash(password).await.map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AuthError::HashingFailure(e)
        })?;

        let id = self
            .identity_store
            .create(NewAccount::new(email, password_hash))
            .await
            .map_err(|e| {
                match &e {
                    StoreError::Conflict => {
                        tracing::warn!("Account created concurrently for the same handle")
                    }
                    StoreError::UnexpectedError(_) => {
                        tracing::error!(error = %e, "Failed to persist account")
                    }
                }
                AuthError::PersistFailure(e)
            })?;

        tracing::info!(account_id = %id, "Account registered");
        Ok(id)
    }
}
