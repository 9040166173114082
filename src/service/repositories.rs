//! Repository creation service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::github::{CreateRepoRequest, CreateRepoResponse, RepoProvider};

use super::ApiError;

/// Message returned when the requested name is blank.
const INVALID_NAME: &str = "invalid repository name";

/// What a caller submits to create a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// What a caller receives once the repository exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCreated {
    pub id: i64,
    pub owner: String,
    pub name: String,
}

impl From<CreateRepoResponse> for RepoCreated {
    fn from(response: CreateRepoResponse) -> Self {
        Self {
            id: response.id,
            owner: response.owner.login,
            name: response.name,
        }
    }
}

/// Creates repositories through a [`RepoProvider`] with a fixed token.
///
/// The provider and token are injected at construction; the service keeps
/// no other state and can be shared across request handlers.
pub struct RepositoryService<P> {
    provider: P,
    token: String,
}

impl<P: fmt::Debug> fmt::Debug for RepositoryService<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryService")
            .field("provider", &self.provider)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl<P> RepositoryService<P> {
    #[must_use]
    pub fn new(provider: P, token: impl Into<String>) -> Self {
        Self {
            provider,
            token: token.into(),
        }
    }

    /// Returns the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: RepoProvider> RepositoryService<P> {
    /// Validates `input` and creates the repository upstream.
    ///
    /// The name is trimmed before use. Only the name and description are
    /// forwarded; the repository is created public with issues, projects
    /// and wiki disabled.
    ///
    /// # Errors
    ///
    /// - [`ApiError::bad_request`] if the trimmed name is empty; the provider is not called.
    /// - The provider's status and message, unchanged, if creation fails.
    pub async fn create_repo(&self, input: CreateRepoInput) -> Result<RepoCreated, ApiError> {
        let name = input.name.trim();
        if name.is_empty() {
            tracing::warn!("Rejected repository request with blank name");
            return Err(ApiError::bad_request(INVALID_NAME));
        }

        let request = CreateRepoRequest::new(name).with_description(input.description);

        match self.provider.create_repo(&self.token, &request).await {
            Ok(response) => {
                tracing::info!(
                    id = response.id,
                    full_name = %response.full_name,
                    "Repository created"
                );
                Ok(response.into())
            }
            Err(e) => {
                tracing::warn!(
                    name,
                    kind = ?e.kind(),
                    status = e.status_code().as_u16(),
                    "Repository creation failed: {e}"
                );
                Err(e.into())
            }
        }
    }
}
