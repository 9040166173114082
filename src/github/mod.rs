//! GitHub provider layer.
//!
//! Performs one authenticated "create repository" call and normalizes every
//! outcome into `Result<CreateRepoResponse, ProviderError>`:
//! - Wire shapes ([`CreateRepoRequest`], [`CreateRepoResponse`], [`ApiErrorPayload`])
//! - Body classification ([`classify`], [`Classified`])
//! - The normalized error and its status policy ([`ProviderError`], [`status_for`])
//! - The provider itself ([`GithubProvider`], [`RepoProvider`])

mod classify;
mod error;
mod provider;
mod types;


pub use classify::{Classified, classify};
pub use error::{FailureKind, ProviderError, message, status_for};
pub use provider::{
    CREATE_REPO_URL, DEFAULT_USER_AGENT, GithubProvider, RepoProvider, authorization_header,
};
pub use types::{
    ApiErrorDetail, ApiErrorPayload, CreateRepoRequest, CreateRepoResponse, RepoOwner,
};
