//! Deterministic transport doubles shared by tests across the crate.
//!
//! [`MockClient`] answers requests from a table of [`Mockup`]s keyed on
//! method + URL and records every request it receives.

use std::sync::Mutex;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, ResponseBody};

/// What a mockup answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with the given status and fully buffered body.
    Respond {
        status: http::StatusCode,
        body: Vec<u8>,
    },
    /// Respond with the given status, but fail when the body is read.
    BrokenBody {
        status: http::StatusCode,
        reason: String,
    },
    /// Fail before any response is produced.
    Fail(String),
}

/// A canned answer for one method + URL pair.
#[derive(Debug, Clone)]
pub struct Mockup {
    pub method: http::Method,
    pub url: String,
    pub reply: Reply,
}

impl Mockup {
    pub fn post(url: &str, reply: Reply) -> Self {
        Self {
            method: http::Method::POST,
            url: url.to_string(),
            reply,
        }
    }
}

/// Mock HTTP client that matches requests against registered mockups.
#[derive(Debug, Default)]
pub struct MockClient {
    mockups: Mutex<Vec<Mockup>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mockup(self, mockup: Mockup) -> Self {
        self.mockups.lock().unwrap().push(mockup);
        self
    }

    /// Shortcut for a POST mockup answering `status` with `body`.
    pub fn responding(url: &str, status: http::StatusCode, body: &str) -> Self {
        Self::new().with_mockup(Mockup::post(
            url,
            Reply::Respond {
                status,
                body: body.as_bytes().to_vec(),
            },
        ))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let found = self
            .mockups
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.method == req.method && m.url == req.url.as_str())
            .map(|m| m.reply.clone());
        let key = format!("{} {}", req.method, req.url);
        self.requests.lock().unwrap().push(req);

        match found {
            None => Err(HttpError::connection(format!("no mockup found for {key}"))),
            Some(Reply::Fail(reason)) => Err(HttpError::connection(reason)),
            Some(Reply::Respond { status, body }) => {
                Ok(HttpResponse::new(status, http::HeaderMap::new(), body))
            }
            Some(Reply::BrokenBody { status, reason }) => {
                let chunks = tokio_stream::iter(vec![
                    Ok(b"{\"id\":".to_vec()),
                    Err(HttpError::body(std::io::Error::other(reason))),
                ]);
                Ok(HttpResponse::new(
                    status,
                    http::HeaderMap::new(),
                    ResponseBody::from_stream(chunks),
                ))
            }
        }
    }
}

impl HttpClient for std::sync::Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}
