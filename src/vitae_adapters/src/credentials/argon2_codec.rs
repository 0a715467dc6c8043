use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use vitae_core::{CredentialCodec, HashingError, Password, PasswordHash};

use crate::config::HashingSettings;

/// Argon2id credential codec.
///
/// The work factor only applies to new hashes. Verification reads the
/// parameters and salt embedded in the stored PHC string, so raising the cost
/// does not invalidate existing accounts.
#[derive(Clone)]
pub struct Argon2Codec {
    params: Params,
}

impl Argon2Codec {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, HashingError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashingError(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn from_settings(settings: &HashingSettings) -> Result<Self, HashingError> {
        Self::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
        )
    }
}

#[async_trait]
impl CredentialCodec for Argon2Codec {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, HashingError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| compute_password_hash(params, &password))
        })
        .await
        .map_err(|e| HashingError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, hash: PasswordHash, candidate: Password) -> bool {
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| verify_password_hash(&hash, &candidate))
        })
        .await;

        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "Password verification failed");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

fn compute_password_hash(params: Params, password: &Password) -> Result<PasswordHash, HashingError> {
    let salt = SaltString::generate(rand_core::OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
        .map(|h| PasswordHash::new(Secret::from(h.to_string())))
        .map_err(|e| HashingError(e.to_string()))
}

fn verify_password_hash(
    expected_password_hash: &PasswordHash,
    password_candidate: &Password,
) -> Result<(), argon2::password_hash::Error> {
    let expected_password_hash = PhcHash::new(expected_password_hash.as_str())?;

    Argon2::default().verify_password(
        password_candidate.as_ref().expose_secret().as_bytes(),
        &expected_password_hash,
    )
}
