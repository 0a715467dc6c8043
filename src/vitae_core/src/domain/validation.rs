use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be between {min} and {max} characters")]
    PasswordLength { min: usize, max: usize },
    #[error("Invalid account id")]
    InvalidAccountId,
}
