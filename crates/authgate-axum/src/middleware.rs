//! The two gate middlewares: annotate-only authorization and enforcement

use std::sync::Arc;

use authgate_core::{enforce, AuthContext, Gate};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::GateRejection;

/// Shareable gate state for `axum::middleware::from_fn_with_state`.
///
/// Cloning is cheap; all clones evaluate against the same immutable
/// [`Gate`] configuration.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    gate: Arc<Gate>,
}

impl AuthorizationGate {
    pub fn new(gate: Gate) -> Self {
        Self {
            gate: Arc::new(gate),
        }
    }
}

/// Authorization middleware: annotates the request, never rejects it.
///
/// Reads the gate's header, runs parse and verify, and stores the outcome in
/// request extensions as an [`AuthContext`]. A request that carries no
/// credential or fails verification continues down the pipeline with a
/// negative context; only parser and verifier failures abort it.
///
/// Apply with `middleware::from_fn_with_state(gate, authorize)`.
pub async fn authorize(
    State(state): State<AuthorizationGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, GateRejection> {
    // Reuse a context left by an earlier gate in a chain.
    let mut ctx = req
        .extensions()
        .get::<AuthContext>()
        .cloned()
        .unwrap_or_default();

    // Non-UTF-8 header values cannot carry a token; treated as absent.
    let value = req
        .headers()
        .get(state.gate.header())
        .and_then(|v| v.to_str().ok());

    state.gate.evaluate(value, &mut ctx).await?;
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// Enforcement middleware: rejects any request not marked authorized.
///
/// Precondition: [`authorize`] ran earlier in the pipeline. A missing
/// context is a wiring error and is rejected with a 500, never passed
/// through.
///
/// Apply with `middleware::from_fn(require_authorized)`.
pub async fn require_authorized(req: Request, next: Next) -> Result<Response, GateRejection> {
    match req.extensions().get::<AuthContext>() {
        Some(ctx) => {
            enforce(ctx)?;
            Ok(next.run(req).await)
        }
        None => {
            tracing::error!(
                "authorization context missing; is the authorize middleware installed?"
            );
            Err(GateRejection::missing_context())
        }
    }
}
