//! Classification of raw upstream response bodies.
//!
//! The decision is made on payload shape alone. The upstream status code is
//! never consulted: a 401 whose body looks like a created repository is a
//! success, and a 201 whose body carries an error message is a failure.
//!
//! The body must be a JSON object; anything else (arrays, scalars, `null`)
//! is [`Classified::Unparseable`]. Two decode attempts then run in order:
//!
//! 1. As [`ApiErrorPayload`]. A decode failure ends classification as
//!    [`Classified::Unparseable`]; a non-empty `message` ends it as
//!    [`Classified::ApiError`].
//! 2. As [`CreateRepoResponse`]. Success yields [`Classified::Success`],
//!    failure yields [`Classified::InvalidSuccess`].

use serde::de::Error as _;
use serde_json::{Map, Value};

use super::error::{FailureKind, ProviderError, message};
use super::types::{ApiErrorPayload, CreateRepoResponse};

/// Outcome of classifying a response body.
#[derive(Debug)]
pub enum Classified {
    /// The upstream reported an error with a non-empty message.
    ApiError(ApiErrorPayload),
    /// The body is a created repository.
    Success(CreateRepoResponse),
    /// The body is not JSON, or has a field of the wrong type.
    Unparseable(serde_json::Error),
    /// The body is not an error, but not a created repository either.
    InvalidSuccess(serde_json::Error),
}

/// Classifies a fully read response body.
#[must_use]
pub fn classify(body: &[u8]) -> Classified {
    let object = match parse_object(body) {
        Ok(object) => object,
        Err(e) => return Classified::Unparseable(e),
    };

    let payload: ApiErrorPayload = match serde_json::from_value(Value::Object(object.clone())) {
        Ok(payload) => payload,
        Err(e) => return Classified::Unparseable(e),
    };

    if payload.message().is_some() {
        return Classified::ApiError(payload);
    }

    match serde_json::from_value::<CreateRepoResponse>(Value::Object(object)) {
        Ok(response) => Classified::Success(response),
        Err(e) => Classified::InvalidSuccess(e),
    }
}

/// Parses `body` as JSON, accepting only a top-level object.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::from_slice(body)? {
        Value::Object(object) => Ok(object),
        _ => Err(serde_json::Error::custom("expected a JSON object")),
    }
}

impl Classified {
    /// Folds the classification into the provider's result contract.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] for every variant except [`Classified::Success`].
    pub fn into_result(self) -> Result<CreateRepoResponse, ProviderError> {
        match self {
            Self::Success(response) => Ok(response),
            Self::ApiError(payload) => Err(ProviderError::new(
                FailureKind::Api,
                payload.message.unwrap_or_default(),
            )),
            Self::Unparseable(_) => Err(ProviderError::new(
                FailureKind::InvalidJson,
                message::INVALID_JSON_RESPONSE_BODY,
            )),
            Self::InvalidSuccess(_) => Err(ProviderError::new(
                FailureKind::InvalidSuccessBody,
                message::INVALID_SUCCESS_RESPONSE_BODY,
            )),
        }
    }
}
