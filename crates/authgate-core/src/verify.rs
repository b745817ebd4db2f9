//! Token verification - the caller-supplied capability

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AuthResult;

/// What a verifier decided about a token.
///
/// A denial is an expected outcome, not a failure: the gate records it and
/// lets the request continue. Verifier failures (expired signing keys,
/// unreachable introspection endpoints, ...) are `Err`, not `Denied`.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Token is not valid
    Denied,
    /// Token is valid, nothing to attach
    Granted,
    /// Token is valid; the payload (e.g. decoded claims) is attached to the
    /// request context for downstream consumers
    GrantedWithPayload(Value),
}

impl Verdict {
    /// Whether this verdict authorizes the request
    pub fn is_granted(&self) -> bool {
        !matches!(self, Verdict::Denied)
    }
}

/// Caller-supplied capability deciding whether a token is valid.
///
/// Verification may suspend; the gate waits for the parse to settle fully
/// before calling it. There is no default implementation - what makes a
/// token valid is the caller's business.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AuthResult<Verdict>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn granted_verdicts() {
        assert!(!Verdict::Denied.is_granted());
        assert!(Verdict::Granted.is_granted());
        assert!(Verdict::GrantedWithPayload(json!({"sub": "u1"})).is_granted());
    }
}
