//! Handler-side access to the authorization outcome
//!
//! The authorization middleware stores an [`AuthContext`] in request
//! extensions; handlers receive it through this extractor and never touch
//! extensions directly.

use authgate_core::AuthContext;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::GateRejection;

/// Extractor for the request's [`AuthContext`].
///
/// Works on any route behind the [`authorize`](crate::middleware::authorize)
/// middleware, whether or not the request is authorized - inspect
/// [`AuthContext::is_authorized`] for the outcome. A missing context means
/// the middleware never ran and rejects with a 500.
pub struct AuthOutcome(pub AuthContext);

impl<S> FromRequestParts<S> for AuthOutcome
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(AuthOutcome)
            .ok_or_else(|| {
                tracing::error!(
                    "authorization context missing; is the authorize middleware installed?"
                );
                GateRejection::missing_context()
            })
    }
}
