//! Wire shapes exchanged with the GitHub repository API.

use serde::{Deserialize, Serialize};

/// Body of a "create repository for the authenticated user" call.
///
/// Serialized verbatim, with snake_case keys, as the upstream request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoRequest {
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub private: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
}

impl CreateRepoRequest {
    /// Creates a request for a public repository with every feature flag off.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Owner block of a created repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub login: String,
}

/// Success shape returned by the upstream API.
///
/// `id`, `name` and `full_name` are required; a body missing any of them
/// is not a created repository. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoResponse {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub owner: RepoOwner,
}

/// One entry of the `errors` array in an upstream error payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub resource: String,
    pub code: String,
    pub field: String,
    pub message: String,
}

/// Error shape returned by the upstream API.
///
/// Every field is optional, so almost any JSON object decodes into this
/// type; only a non-empty `message` marks the payload as an actual error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiErrorPayload {
    /// Returns the upstream message if it is present and non-empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
