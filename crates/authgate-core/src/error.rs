//! Error taxonomy raised by gates into the hosting pipeline

use thiserror::Error;

/// Boxed error for failures raised by caller-supplied capabilities
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for gate operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while authorizing a request
#[derive(Debug, Error)]
pub enum AuthError {
    /// Client sent a malformed credential; the message names the offending
    /// header and the expected format
    #[error("{0}")]
    BadRequest(String),

    /// Request lacked a valid credential. Raised only by enforcement, never
    /// by the authorization gate itself
    #[error("Authorization required.")]
    Unauthorized,

    /// Failure raised by a caller-supplied parser or verifier, carried
    /// unchanged
    #[error("{0}")]
    Capability(BoxError),
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::BadRequest(_) => 400,
            AuthError::Unauthorized => 401,
            AuthError::Capability(_) => 500,
        }
    }

    /// Wrap an opaque capability failure
    pub fn capability(err: impl Into<BoxError>) -> Self {
        AuthError::Capability(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AuthError::BadRequest("x-token: bad".into()).status_code(), 400);
        assert_eq!(AuthError::Unauthorized.status_code(), 401);
        assert_eq!(AuthError::capability("boom").status_code(), 500);
    }

    #[test]
    fn capability_message_is_forwarded_unchanged() {
        let err = AuthError::capability("introspection endpoint unreachable");
        assert_eq!(err.to_string(), "introspection endpoint unreachable");
    }

    #[test]
    fn unauthorized_message() {
        assert_eq!(AuthError::Unauthorized.to_string(), "Authorization required.");
    }
}
