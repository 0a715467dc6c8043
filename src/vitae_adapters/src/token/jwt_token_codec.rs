use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use vitae_core::{AccountId, SigningError, TokenError, TokenIssuer, TokenVerifier};

use crate::config::defaults::TOKEN_TTL_HOURS;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Immutable signing configuration, built once at startup.
#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl: Duration,
}

impl JwtConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    pub fn with_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 bearer token issuer and verifier.
#[derive(Clone)]
pub struct JwtTokenCodec {
    config: JwtConfig,
    validation: Validation,
}

impl JwtTokenCodec {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self { config, validation }
    }

}

impl TokenIssuer for JwtTokenCodec {
    fn issue(&self, subject: AccountId) -> Result<String, SigningError> {
        let secret = self.config.as_bytes();
        if secret.is_empty() {
            return Err(SigningError::EmptyKey);
        }

        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.config.token_ttl)
            .ok_or(SigningError::Lifetime)?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(
            &Header::new(ALGORITHM),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| SigningError::Encoding(e.to_string()))
    }
}

impl TokenVerifier for JwtTokenCodec {
    fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        let secret = self.config.as_bytes();
        // An empty HMAC key is known to everyone
        if secret.is_empty() {
            return Err(TokenError::Invalid);
        }

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret),
            &self.validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => {
                tracing::debug!(error = %e, "Rejected bearer token");
                TokenError::Invalid
            }
        })?;

        claims.sub.parse().map_err(|_| TokenError::Invalid)
    }
}
