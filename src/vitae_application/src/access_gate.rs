use vitae_core::{AuthError, AuthenticatedSubject, GateRejection, TokenVerifier};

const BEARER_SCHEME: &str = "bearer";

/// Converts an `Authorization` header into a proven identity.
///
/// Has no side effects: the caller decides where the subject is attached.
#[derive(Clone)]
pub struct AccessGate<V> {
    verifier: V,
}

impl<V> AccessGate<V>
where
    V: TokenVerifier,
{
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// Authenticate from the raw `Authorization` header bytes, if any.
    pub fn authenticate(
        &self,
        authorization: Option<&[u8]>,
    ) -> Result<AuthenticatedSubject, AuthError> {
        let token = extract_bearer_token(authorization).map_err(AuthError::Unauthenticated)?;

        let account_id = self
            .verifier
            .verify(token)
            .map_err(|e| AuthError::Unauthenticated(GateRejection::Token(e)))?;

        Ok(AuthenticatedSubject::new(account_id))
    }
}

/// Pulls `<token>` out of `Bearer <token>`. The scheme is matched
/// case-insensitively.
pub fn extract_bearer_token(authorization: Option<&[u8]>) -> Result<&str, GateRejection> {
    let raw = authorization.ok_or(GateRejection::MissingHeader)?;
    let value = std::str::from_utf8(raw).map_err(|_| GateRejection::MalformedHeader)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(GateRejection::MalformedHeader)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) || token.is_empty() || token.contains(' ') {
        return Err(GateRejection::MalformedHeader);
    }

    Ok(token)
}
