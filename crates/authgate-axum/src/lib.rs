//! authgate-axum - axum middleware adapters for request authorization gates
//!
//! Two middlewares over the `authgate-core` pipeline:
//!
//! - [`authorize`] runs a [`Gate`] against the request and stores the outcome
//!   in request extensions as an [`AuthContext`]. It annotates only - a
//!   request that fails verification continues down the pipeline.
//! - [`require_authorized`] rejects any request whose context is not marked
//!   authorized with a 401.
//!
//! Handlers read the outcome through the [`AuthOutcome`] extractor.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use authgate_axum::{authorize, require_authorized, AuthorizationGate};
//! use authgate_core::{BearerParser, Gate};
//! use axum::{middleware, Router};
//!
//! let gate = AuthorizationGate::new(
//!     Gate::new("authorization", Arc::new(MyVerifier))
//!         .with_parser(Arc::new(BearerParser)),
//! );
//!
//! let app = Router::new()
//!     .nest("/v1", protected.layer(middleware::from_fn(require_authorized)))
//!     .route("/health", get(health))
//!     .layer(middleware::from_fn_with_state(gate, authorize));
//! ```

pub mod error;
pub mod extract;
pub mod middleware;

pub use error::GateRejection;
pub use extract::AuthOutcome;
pub use middleware::{authorize, require_authorized, AuthorizationGate};

// Re-export the core surface for convenience
pub use authgate_core::{
    AuthContext, AuthError, BearerParser, Gate, IdentityParser, TokenParser, TokenVerifier,
    Verdict,
};
