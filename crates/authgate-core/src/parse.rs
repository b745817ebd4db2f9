//! Token parsers - extract a credential token from a raw header value

use async_trait::async_trait;

use crate::error::{AuthError, AuthResult};

/// Strategy for extracting a token from a header value.
///
/// Parsers may suspend (e.g. to look up a decoding key); the built-in ones
/// are synchronous in practice. `header` is the name of the header the value
/// was read from and is used in error messages only.
#[async_trait]
pub trait TokenParser: Send + Sync {
    /// Extract a token from `value`. An empty returned token is treated by
    /// the gate as "no credential present", not as an error.
    async fn parse(&self, header: &str, value: &str) -> AuthResult<String>;
}

/// Parser that returns the raw header value unchanged. Never fails.
///
/// This is the default when a gate is built without an explicit parser -
/// useful for headers like `x-api-key` whose whole value is the token.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityParser;

#[async_trait]
impl TokenParser for IdentityParser {
    async fn parse(&self, _header: &str, value: &str) -> AuthResult<String> {
        Ok(value.to_string())
    }
}

/// Parser for the `Bearer <token>` scheme.
///
/// The scheme keyword is matched case-insensitively. Anything that does not
/// split on single spaces into exactly the keyword and a non-empty token is
/// a format error - extra spaces are rejected, not coerced.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerParser;

#[async_trait]
impl TokenParser for BearerParser {
    async fn parse(&self, header: &str, value: &str) -> AuthResult<String> {
        if value.is_empty() {
            return Err(AuthError::BadRequest(format!(
                "{header}: String or non-empty value expected."
            )));
        }

        let parts: Vec<&str> = value.split(' ').collect();
        if parts.len() != 2 || !parts[0].eq_ignore_ascii_case("bearer") || parts[1].is_empty() {
            return Err(AuthError::BadRequest(format!(
                "{header}: \"Bearer [token]\" format expected."
            )));
        }

        Ok(parts[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[tokio::test]
    async fn identity_returns_value_unchanged() {
        let token = IdentityParser.parse("x-api-key", "raw value").await.unwrap();
        assert_eq!(token, "raw value");

        let token = IdentityParser.parse("x-api-key", "").await.unwrap();
        assert_eq!(token, "");
    }

    #[tokio::test]
    async fn bearer_extracts_token() {
        let token = BearerParser
            .parse("authorization", "Bearer abc123")
            .await
            .unwrap();
        assert_eq!(token, "abc123");
    }

    #[rstest]
    #[case("bearer abc123")]
    #[case("BEARER abc123")]
    #[case("BeArEr abc123")]
    #[tokio::test]
    async fn bearer_scheme_is_case_insensitive(#[case] value: &str) {
        let token = BearerParser.parse("authorization", value).await.unwrap();
        assert_eq!(token, "abc123");
    }

    #[tokio::test]
    async fn bearer_rejects_empty_value() {
        let err = BearerParser.parse("authorization", "").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "authorization: String or non-empty value expected."
        );
        assert_eq!(err.status_code(), 400);
    }

    #[rstest]
    #[case("Bearer")] // no token at all
    #[case("Bearer ")] // empty token
    #[case("NotBearer abc123")] // wrong scheme keyword
    #[case("Bearer  abc123")] // double space splits into three parts
    #[case("Bearer abc 123")] // trailing garbage
    #[case("abc123")] // bare token without scheme
    #[tokio::test]
    async fn bearer_rejects_malformed_values(#[case] value: &str) {
        let err = BearerParser.parse("x-auth", value).await.unwrap_err();
        assert_eq!(err.to_string(), "x-auth: \"Bearer [token]\" format expected.");
        assert_eq!(err.status_code(), 400);
    }
}
