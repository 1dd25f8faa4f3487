use axum::Json;
use axum::extract::{FromRequest, Request};
use daymemory_core::{DomainError, ErrorKind, Validate};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that runs field constraints after deserialization.
///
/// Rejections surface through [`ApiError`] so they leave through the same
/// translation boundary as everything else: a body that fails to
/// deserialize maps to `INVALID_REQUEST`, and constraint violations map
/// to the `VALIDATION_ERROR` response with one entry per invalid field,
/// in the order the type reports them.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| DomainError::with_detail(ErrorKind::InvalidRequest, rejection.body_text()))?;

        let violations = value.validate();
        if violations.is_empty() {
            Ok(Self(value))
        } else {
            Err(ApiError::Validation(violations))
        }
    }
}
