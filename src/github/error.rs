//! Normalized error returned by the provider for every failure path.

use http::StatusCode;
use thiserror::Error;

/// Fixed messages for failures that carry no upstream text.
pub mod message {
    /// The response body could not be read.
    pub const INVALID_RESPONSE_BODY: &str = "invalid response body";
    /// The response body is not a JSON object of the error shape.
    pub const INVALID_JSON_RESPONSE_BODY: &str = "invalid json response body";
    /// The response body passed the error check but is not a created repository.
    pub const INVALID_SUCCESS_RESPONSE_BODY: &str = "invalid success response body";
}

/// Which stage of a provider call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request could not be built (unrepresentable header, encoding failure).
    Request,
    /// The transport failed before producing a response.
    Transport,
    /// The response body could not be read.
    BodyRead,
    /// The body did not decode as the error shape.
    InvalidJson,
    /// The upstream API reported an error.
    Api,
    /// The body decoded as neither a real error nor a created repository.
    InvalidSuccessBody,
}

/// Maps a failure to the status code reported to callers.
///
/// Every failure is reported as an internal error. Upstream status codes
/// are never forwarded: callers learn that creation failed and the
/// upstream's explanation, not the upstream's HTTP semantics.
#[must_use]
pub const fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Request
        | FailureKind::Transport
        | FailureKind::BodyRead
        | FailureKind::InvalidJson
        | FailureKind::Api
        | FailureKind::InvalidSuccessBody => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Uniform error for every failed provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    kind: FailureKind,
    status_code: StatusCode,
    message: String,
}

impl ProviderError {
    /// Creates an error whose status code follows [`status_for`].
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_code: status_for(kind),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
