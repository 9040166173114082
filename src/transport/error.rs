//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for transport operations.
///
/// The display form of every variant is the underlying failure's own
/// message, so callers can surface it to users unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("{0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("{0}")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request could not be built, typically because of the URL.
    #[error("{0}")]
    InvalidUrl(String),

    /// The response arrived but its body could not be read.
    #[error("{0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HttpError {
    /// Wraps any error as a connection failure.
    pub fn connection(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Connection(source.into())
    }

    /// Wraps any error as a body read failure.
    pub fn body(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Body(source.into())
    }
}
