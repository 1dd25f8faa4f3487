//! Shared error taxonomy for daymemory
//!
//! Defines the closed catalog of failure kinds, the domain error that
//! carries them to the HTTP boundary, the JSON response bodies clients
//! see, and the request-validation primitives. The server layer turns
//! these into actual HTTP responses, keeping the taxonomy decoupled
//! from axum.

#![allow(clippy::must_use_candidate)]

mod error;
mod response;
mod validation;

pub use error::{DomainError, ErrorKind};
pub use response::{ErrorResponse, FieldViolation, ValidationErrorResponse};
pub use validation::{EVENT_DATE_MESSAGE, Validate, validate_event_date};
