use jiff::Zoned;
use jiff::civil::DateTime;
use serde::Serialize;
use serde_json::Value;

use crate::ErrorKind;

/// Body of every non-validation failure response.
///
/// Constructed fresh per failed request and never mutated afterwards.
/// The `status` field always equals the HTTP status of the response
/// carrying it.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    pub timestamp: DateTime,
}

impl ErrorResponse {
    /// Build the response body for a catalog kind.
    ///
    /// Carries the kind's default message only — any operator detail on
    /// the underlying error stays in the log.
    pub fn of(kind: ErrorKind) -> Self {
        Self {
            status: kind.status().as_u16(),
            code: kind.name(),
            message: kind.message().to_owned(),
            timestamp: now(),
        }
    }
}

/// Body of a failed-validation response: the generic fields plus one
/// entry per invalid field, in the order the violations were reported.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    pub errors: Vec<FieldViolation>,
    pub timestamp: DateTime,
}

impl ValidationErrorResponse {
    pub fn of(kind: ErrorKind, errors: Vec<FieldViolation>) -> Self {
        Self {
            status: kind.status().as_u16(),
            code: kind.name(),
            message: kind.message().to_owned(),
            errors,
            timestamp: now(),
        }
    }
}

/// One invalid input field: its name, the offending value echoed back,
/// and a human-readable reason.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub rejected_value: Value,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rejected_value: Value, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rejected_value,
            message: message.into(),
        }
    }
}

/// Translation time: process-local wall clock, no timezone normalization
fn now() -> DateTime {
    Zoned::now().datetime()
}
