//! HTTP rejection type for gate errors

use authgate_core::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Rejection produced when a gate forwards an error into the pipeline
#[derive(Debug)]
pub struct GateRejection(pub AuthError);

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl GateRejection {
    /// Rejection for a request whose authorization context was never
    /// populated: the enforcement middleware (or an extractor) ran without
    /// an authorization gate upstream. A wiring error, reported loudly
    /// instead of silently passing or failing the request.
    pub(crate) fn missing_context() -> Self {
        GateRejection(AuthError::capability(
            "authorization context missing; no authorization gate ran for this request",
        ))
    }
}

impl From<AuthError> for GateRejection {
    fn from(err: AuthError) -> Self {
        GateRejection(err)
    }
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            AuthError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AuthError::Capability(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        let message = self.0.to_string();

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "gate error");
        } else {
            tracing::debug!(error = error_type, %message, "gate client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
