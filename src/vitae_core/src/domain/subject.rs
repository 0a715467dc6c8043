use super::account::AccountId;

/// The identity proven by a verified bearer token, scoped to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedSubject {
    pub account_id: AccountId,
}

impl AuthenticatedSubject {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}
