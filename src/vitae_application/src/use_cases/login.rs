use vitae_core::{
    AuthError, CredentialCodec, CredentialRejection, Email, IdentityStore, Password, TokenIssuer,
};

/// Login use case - exchanges valid credentials for a bearer token
pub struct LoginUseCase<'a, S, C, T>
where
    S: IdentityStore,
    C: CredentialCodec,
    T: TokenIssuer,
{
    identity_store: &'a S,
    codec: &'a C,
    token_issuer: &'a T,
}

impl<'a, S, C, T> LoginUseCase<'a, S, C, T>
where
    S: IdentityStore,
    C: CredentialCodec,
    T: TokenIssuer,
{
    pub fn new(identity_store: &'a S, codec: &'a C, token_issuer: &'a T) -> Self {
        Self {
            identity_store,
            codec,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// An unknown handle and a wrong secret both yield
    /// [`AuthError::InvalidCredentials`]; only the logged reason differs.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<String, AuthError> {
        let account = self
            .identity_store
            .find_by_handle(&email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity store lookup failed");
                AuthError::DatabaseFailure(e)
            })?;

        let Some(account) = account else {
            tracing::info!(reason = ?CredentialRejection::UnknownHandle, "Login refused");
            return Err(AuthError::invalid_credentials(
                CredentialRejection::UnknownHandle,
            ));
        };

        if !self
            .codec
            .verify(account.password_hash().clone(), password)
            .await
        {
            tracing::info!(reason = ?CredentialRejection::WrongSecret, "Login refused");
            return Err(AuthError::invalid_credentials(
                CredentialRejection::WrongSecret,
            ));
        }

        let token = self.token_issuer.issue(account.id()).map_err(|e| {
            tracing::error!(error = %e, account_id = %account.id(), "Failed to issue token");
            AuthError::TokenIssuanceFailure(e)
        })?;

        tracing::info!(account_id = %account.id(), "Login succeeded");
        Ok(token)
    }
}
