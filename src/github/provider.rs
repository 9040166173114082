//! Authenticated repository creation against the GitHub REST API.

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};

use crate::transport::{HttpClient, HttpRequest};

use super::classify::classify;
use super::error::{FailureKind, ProviderError, message};
use super::types::{CreateRepoRequest, CreateRepoResponse};

/// Upstream endpoint creating a repository for the authenticated user.
pub const CREATE_REPO_URL: &str = "https://api.github.com/user/repos";

/// Media type GitHub recommends for REST calls.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Default `User-Agent`; GitHub rejects requests that carry none.
pub const DEFAULT_USER_AGENT: &str = concat!("repo-facade/", env!("CARGO_PKG_VERSION"));

/// Builds the `Authorization` header value for a personal access token.
///
/// The token is not validated; an empty token yields `"token "`.
#[must_use]
pub fn authorization_header(token: &str) -> String {
    format!("token {token}")
}

/// Something that can create a repository upstream.
///
/// [`GithubProvider`] is the production implementation; the service layer
/// depends on this trait so it can be exercised without a transport.
pub trait RepoProvider: Send + Sync {
    /// Creates a repository using `token` for authentication.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] for every failure path; see [`FailureKind`].
    fn create_repo(
        &self,
        token: &str,
        request: &CreateRepoRequest,
    ) -> impl std::future::Future<Output = Result<CreateRepoResponse, ProviderError>> + Send;
}

/// GitHub provider over any [`HttpClient`].
///
/// Holds no per-call state: the token and request are inputs of each call,
/// so one provider can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use repo_facade::github::{CREATE_REPO_URL, CreateRepoRequest, GithubProvider, RepoProvider};
/// use repo_facade::transport::ReqwestClient;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = GithubProvider::new(ReqwestClient::new(), Url::parse(CREATE_REPO_URL)?);
/// let created = provider
///     .create_repo("ghp_example", &CreateRepoRequest::new("hello-world"))
///     .await?;
/// println!("created {}", created.full_name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GithubProvider<H> {
    client: H,
    endpoint: url::Url,
    user_agent: HeaderValue,
}

impl<H> GithubProvider<H> {
    /// Creates a provider posting to `endpoint` through `client`.
    #[must_use]
    pub fn new(client: H, endpoint: url::Url) -> Self {
        Self {
            client,
            endpoint,
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
        }
    }

    /// Sets the `User-Agent` sent upstream.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Builds the authenticated POST for `request`.
    fn build_request(
        &self,
        token: &str,
        request: &CreateRepoRequest,
    ) -> Result<HttpRequest, ProviderError> {
        let authorization = HeaderValue::from_str(&authorization_header(token)).map_err(|e| {
            ProviderError::new(
                FailureKind::Request,
                format!("invalid authorization header: {e}"),
            )
        })?;
        let body = serde_json::to_vec(request).map_err(|e| {
            ProviderError::new(
                FailureKind::Request,
                format!("invalid request body: {e}"),
            )
        })?;

        Ok(HttpRequest::post(self.endpoint.clone())
            .with_header(AUTHORIZATION, authorization)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(ACCEPT, HeaderValue::from_static(GITHUB_JSON))
            .with_header(USER_AGENT, self.user_agent.clone())
            .with_body(body))
    }
}

impl<H: HttpClient> RepoProvider for GithubProvider<H> {
    async fn create_repo(
        &self,
        token: &str,
        request: &CreateRepoRequest,
    ) -> Result<CreateRepoResponse, ProviderError> {
        let http_request = self.build_request(token, request)?;

        let response = self
            .client
            .request(http_request)
            .await
            .map_err(|e| ProviderError::new(FailureKind::Transport, e.to_string()))?;

        let body = response.body.bytes().await.map_err(|_| {
            ProviderError::new(FailureKind::BodyRead, message::INVALID_RESPONSE_BODY)
        })?;

        classify(&body).into_result()
    }
}
