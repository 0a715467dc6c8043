use secrecy::{ExposeSecret, Secret};

use super::validation::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// A plaintext secret supplied at register or login time.
///
/// The value lives behind [`Secret`], so `Debug` output is redacted and the
/// buffer is zeroed on drop.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Wraps a login attempt's secret as-is.
    ///
    /// The registration length rule is not applied here: an
    /// out-of-range candidate simply fails verification.
    pub fn candidate(secret: Secret<String>) -> Self {
        Self(secret)
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(secret: Secret<String>) -> Result<Self, Self::Error> {
        let length = secret.expose_secret().chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(ValidationError::PasswordLength {
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }
        Ok(Self(secret))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
