use axum::Json;
use axum::response::{IntoResponse, Response};
use daymemory_core::{DomainError, ErrorKind, ErrorResponse, FieldViolation, ValidationErrorResponse};
use thiserror::Error;

/// Every failure a request handler can surface.
///
/// The `IntoResponse` impl below is the single boundary where failures
/// become client-visible JSON. It is total: every variant produces
/// exactly one well-formed response, and no branch can itself fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Classified failure raised by business logic
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input failed constraint checks before the handler ran
    #[error("input validation failed")]
    Validation(Vec<FieldViolation>),

    /// Anything the taxonomy did not anticipate
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ErrorKind> for ApiError {
    fn from(kind: ErrorKind) -> Self {
        Self::Domain(DomainError::new(kind))
    }
}

/// Result alias for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(error) => domain_response(&error),
            Self::Validation(violations) => validation_response(violations),
            Self::Internal(error) => internal_response(&error),
        }
    }
}

/// Classified failure: status, code, and message come from the catalog.
/// Server faults are loud, expected client-input faults are quiet.
fn domain_response(error: &DomainError) -> Response {
    let kind = error.kind();
    if kind.status().is_server_error() {
        tracing::error!(code = kind.name(), error = ?error, "domain error");
    } else {
        tracing::warn!(code = kind.name(), detail = %error.message(), "domain error");
    }
    (kind.status(), Json(ErrorResponse::of(kind))).into_response()
}

/// Validation failure: always a warning, never an operator emergency
fn validation_response(violations: Vec<FieldViolation>) -> Response {
    tracing::warn!(fields = violations.len(), "request validation failed");
    let kind = ErrorKind::ValidationError;
    (kind.status(), Json(ValidationErrorResponse::of(kind, violations))).into_response()
}

/// Unclassified failure: full detail to the log, none to the client
fn internal_response(error: &anyhow::Error) -> Response {
    tracing::error!(error = ?error, "unhandled error");
    let kind = ErrorKind::ServerInternalError;
    (kind.status(), Json(ErrorResponse::of(kind))).into_response()
}
