//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default address the HTTP server listens on.
pub const LISTEN: &str = "127.0.0.1:8080";

/// Default upstream endpoint for repository creation.
pub const API_URL: &str = crate::github::CREATE_REPO_URL;

/// Default upstream request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` sent upstream.
pub const USER_AGENT: &str = crate::github::DEFAULT_USER_AGENT;

/// Environment variable holding the GitHub access token.
pub const TOKEN_ENV: &str = "SECRET_GITHUB_ACCESS_TOKEN";
