//! authgate-core - Core decision pipeline for request authorization gates
//!
//! This crate provides the framework-free half of authgate: a [`Gate`] reads
//! one header value, extracts a token with a pluggable [`TokenParser`], asks
//! a caller-supplied [`TokenVerifier`] about it, and records the outcome in
//! an [`AuthContext`]. A separate [`enforce`] check rejects contexts that are
//! not marked authorized.
//!
//! The gate itself never rejects a request - it only annotates. How headers
//! are read and how rejections turn into responses is the adapter's job
//! (see `authgate-axum`).
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use authgate_core::{enforce, AuthContext, BearerParser, Gate};
//!
//! let gate = Gate::new("authorization", Arc::new(MyVerifier))
//!     .with_parser(Arc::new(BearerParser));
//!
//! let mut ctx = AuthContext::default();
//! gate.evaluate(header_value, &mut ctx).await?;
//! enforce(&ctx)?; // only on routes that require authorization
//! ```

pub mod context;
pub mod error;
pub mod gate;
pub mod parse;
pub mod verify;

pub use context::AuthContext;
pub use error::{AuthError, AuthResult, BoxError};
pub use gate::{enforce, Gate};
pub use parse::{BearerParser, IdentityParser, TokenParser};
pub use verify::{TokenVerifier, Verdict};
