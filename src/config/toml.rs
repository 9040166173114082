//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// HTTP server section
    #[serde(default)]
    pub server: ServerSection,

    /// Upstream GitHub section
    #[serde(default)]
    pub github: GithubSection,
}

/// HTTP server configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Address to listen on
    pub listen: Option<String>,
}

/// Upstream GitHub configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GithubSection {
    /// Personal access token
    pub token: Option<String>,

    /// Repository creation endpoint
    pub api_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# repo-facade configuration file

[server]
# Address the HTTP server listens on (default: 127.0.0.1:8080)
# listen = "127.0.0.1:8080"

[github]
# Personal access token used for every upstream call.
# Prefer the SECRET_GITHUB_ACCESS_TOKEN environment variable,
# which takes precedence over this value.
# token = "ghp_..."

# Repository creation endpoint (default: https://api.github.com/user/repos)
# Point this at a GitHub Enterprise host if needed.
# api_url = "https://api.github.com/user/repos"

# Upstream request timeout in seconds (default: 30)
# timeout = 30

# User-Agent header sent upstream
# user_agent = "repo-facade"
"#
    .to_string()
}
