//! HTTP request/response types and client trait.

use std::fmt;
use std::pin::Pin;

use tokio_stream::{Stream, StreamExt};

use super::HttpError;

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. It uses standard `http` crate types
/// for method and headers, ensuring compatibility with the broader ecosystem.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// A stream of body chunks, as produced by a streaming HTTP client.
type BodyStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, HttpError>> + Send>>;

/// The body of an HTTP response.
///
/// Either already buffered or still arriving as a stream of chunks.
/// Reading a streamed body can fail independently of the request itself,
/// which is why [`ResponseBody::bytes`] returns a `Result`.
pub struct ResponseBody {
    inner: BodyInner,
}

enum BodyInner {
    Full(Vec<u8>),
    Stream(BodyStream),
}

impl ResponseBody {
    /// Creates a body from bytes that are already in memory.
    #[must_use]
    pub fn full(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: BodyInner::Full(bytes.into()),
        }
    }

    /// Creates a body backed by a stream of chunks.
    #[must_use]
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Vec<u8>, HttpError>> + Send + 'static,
    {
        Self {
            inner: BodyInner::Stream(Box::pin(stream)),
        }
    }

    /// Reads the whole body into memory.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by the underlying stream.
    pub async fn bytes(self) -> Result<Vec<u8>, HttpError> {
        match self.inner {
            BodyInner::Full(bytes) => Ok(bytes),
            BodyInner::Stream(mut stream) => {
                let mut buf = Vec::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf)
            }
        }
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            BodyInner::Full(bytes) => f
                .debug_struct("ResponseBody")
                .field("len", &bytes.len())
                .finish(),
            BodyInner::Stream(_) => f.write_str("ResponseBody(<stream>)"),
        }
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::full(bytes)
    }
}

/// An HTTP response received from a server.
///
/// Status and headers are available immediately; the body is read
/// on demand through [`ResponseBody::bytes`].
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub fn new(
        status: http::StatusCode,
        headers: http::HeaderMap,
        body: impl Into<ResponseBody>,
    ) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing calling code
///
/// Implementations must be safe for concurrent use; callers share one
/// client across tasks without additional locking.
///
/// # Example
///
/// ```ignore
/// use repo_facade::transport::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct StaticClient;
///
/// impl HttpClient for StaticClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), b"{}".to_vec()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response head plus an unread body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
