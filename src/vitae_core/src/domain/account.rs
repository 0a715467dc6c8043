use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::validation::ValidationError;

/// Identifier assigned by the identity store when an account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidAccountId)
    }
}

/// A stored credential hash in PHC string format.
///
/// Only credential codecs and identity stores construct these; a plaintext
/// secret never passes through this type.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(phc: Secret<String>) -> Self {
        Self(phc)
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// An account as held by the identity store.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    email: Email,
    password_hash: PasswordHash,
}

impl Account {
    pub fn new(id: AccountId, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// An account that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewAccount {
    email: Email,
    password_hash: PasswordHash,
}

impl NewAccount {
    pub fn new(email: Email, password_hash: PasswordHash) -> Self {
        Self {
            email,
            password_hash,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Binds the store-assigned id.
    pub fn with_id(self, id: AccountId) -> Account {
        Account::new(id, self.email, self.password_hash)
    }
}
