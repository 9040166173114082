//! Service layer between the HTTP surface and the provider.
//!
//! Validates caller input, maps it to the provider's request shape and
//! maps provider outcomes back to caller-facing types ([`RepoCreated`], [`ApiError`]).

mod error;
mod repositories;


pub use error::ApiError;
pub use repositories::{CreateRepoInput, RepoCreated, RepositoryService};
