use axum::{http::StatusCode, Json};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::services::gemini::ProviderError;

/// Everything that can go wrong inside a relay. Clients see all of these the
/// same way: HTTP 400 with an `error` string.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),
    #[error("Gemini API error: {status} {body}")]
    Upstream { status: u16, body: String },
    #[error("{0}")]
    NoContent(&'static str),
    #[error("{0}")]
    Provider(String),
}

impl From<ProviderError> for RelayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, body } => RelayError::Upstream { status, body },
            other => RelayError::Provider(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for RelayError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|list| list.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        RelayError::Validation(message)
    }
}

/// Failure body of an endpoint: the `error` message next to the endpoint's
/// empty success field.
pub trait FailureBody: Serialize {
    fn from_message(message: String) -> Self;
}

pub fn reject<B: FailureBody>(err: RelayError) -> (StatusCode, Json<B>) {
    (StatusCode::BAD_REQUEST, Json(B::from_message(err.to_string())))
}
