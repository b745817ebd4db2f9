//! The authorization gate and the enforcement check

use std::fmt;
use std::sync::Arc;

use crate::context::AuthContext;
use crate::error::{AuthError, AuthResult};
use crate::parse::{IdentityParser, TokenParser};
use crate::verify::{TokenVerifier, Verdict};

/// Immutable configuration for one authorization gate.
///
/// A gate reads one header, extracts a token with its parser and asks its
/// verifier about it. Gates are stateless aside from this configuration, so
/// one instance can serve any number of concurrent requests.
///
/// Evaluation only ever annotates the [`AuthContext`]; rejecting requests is
/// [`enforce`]'s job (or the caller's).
pub struct Gate {
    header: String,
    parser: Arc<dyn TokenParser>,
    verifier: Arc<dyn TokenVerifier>,
}

impl Gate {
    /// Create a gate reading `header`, using the identity parser
    pub fn new(header: impl Into<String>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            header: header.into(),
            parser: Arc::new(IdentityParser),
            verifier,
        }
    }

    /// Replace the default identity parser
    pub fn with_parser(mut self, parser: Arc<dyn TokenParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Name of the header this gate reads
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Evaluate one request's raw header value against this gate.
    ///
    /// `value` is `None` when the header is absent. The context is
    /// overwritten only when the verifier actually ran: an absent or empty
    /// header value, or a parser that yields an empty token, leaves it
    /// untouched - so a chained gate does not clobber an earlier gate's
    /// outcome. When the verifier does run, its verdict wins, and a denial
    /// resets the context to the negative outcome.
    ///
    /// Never returns `Unauthorized` - a denial is a successful-but-negative
    /// result. Parser and verifier failures propagate to the caller; no
    /// partial-mutation guarantee is made in that case.
    pub async fn evaluate(&self, value: Option<&str>, ctx: &mut AuthContext) -> AuthResult<()> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(()),
        };

        let token = self.parser.parse(&self.header, value).await?;
        if token.is_empty() {
            return Ok(());
        }

        // The parse has fully settled before verification starts.
        match self.verifier.verify(&token).await? {
            Verdict::Denied => {
                tracing::debug!(header = %self.header, "token denied");
                ctx.reset();
            }
            Verdict::Granted => ctx.grant(token, None),
            Verdict::GrantedWithPayload(payload) => ctx.grant(token, Some(payload)),
        }

        Ok(())
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Enforcement gate: reject any context not marked authorized.
///
/// Precondition: an authorization gate already ran for this request and
/// populated `ctx`. Callers must fail fast when the context is missing
/// entirely - that is a wiring error, not an unauthorized request.
pub fn enforce(ctx: &AuthContext) -> AuthResult<()> {
    if ctx.is_authorized() {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}
