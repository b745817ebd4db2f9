//! Per-request authorization outcome

use serde::Serialize;
use serde_json::Value;

/// Outcome of the authorization gate for one request.
///
/// Created with defaults on the request's first pass through a gate and
/// overwritten only when a verifier actually ran. Fields are private so the
/// invariant holds by construction: a context that is not authorized carries
/// neither a token nor a payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthContext {
    authorized: bool,
    token: Option<String>,
    payload: Option<Value>,
}

impl AuthContext {
    /// Whether the request passed verification
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Token extracted by the parser; set only when authorized
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Payload returned by the verifier; set only when it returned one
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Record a positive outcome
    pub fn grant(&mut self, token: String, payload: Option<Value>) {
        self.authorized = true;
        self.token = Some(token);
        self.payload = payload;
    }

    /// Reset to the negative outcome (not authorized, no token, no payload)
    pub fn reset(&mut self) {
        *self = AuthContext::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_is_negative() {
        let ctx = AuthContext::default();
        assert!(!ctx.is_authorized());
        assert_eq!(ctx.token(), None);
        assert_eq!(ctx.payload(), None);
    }

    #[test]
    fn grant_sets_all_fields() {
        let mut ctx = AuthContext::default();
        ctx.grant("abc".into(), Some(json!({"sub": "u1"})));
        assert!(ctx.is_authorized());
        assert_eq!(ctx.token(), Some("abc"));
        assert_eq!(ctx.payload(), Some(&json!({"sub": "u1"})));
    }

    #[test]
    fn reset_clears_token_and_payload() {
        let mut ctx = AuthContext::default();
        ctx.grant("abc".into(), Some(json!({"sub": "u1"})));
        ctx.reset();
        assert_eq!(ctx, AuthContext::default());
    }

    #[test]
    fn serializes_with_flat_fields() {
        let mut ctx = AuthContext::default();
        ctx.grant("abc".into(), None);
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(
            value,
            json!({"authorized": true, "token": "abc", "payload": null})
        );
    }
}
