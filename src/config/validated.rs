//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use http::header::HeaderValue;
use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] in the binary, or [`ValidatedConfig::from_raw`]
/// when the sources are already at hand.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Address the HTTP server binds to
    pub listen: SocketAddr,

    /// GitHub personal access token (may be empty)
    pub token: String,

    /// Upstream repository creation endpoint
    pub api_url: Url,

    /// Upstream request timeout
    pub timeout: Duration,

    /// User-Agent sent upstream
    pub user_agent: HeaderValue,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "empty" } else { "set" };

        write!(
            f,
            "Config {{ listen: {}, api_url: {}, timeout: {}s, token: {} }}",
            self.listen,
            self.api_url,
            self.timeout.as_secs(),
            token,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from its sources.
    ///
    /// Priority for every field is CLI, then `env_token` (token only),
    /// then TOML, then built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The listen address is not a socket address
    /// - The API URL is invalid
    /// - The timeout is zero
    /// - The token or user agent cannot be sent as a header value
    pub fn from_raw(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let listen = Self::resolve_listen(cli, toml)?;
        let token = Self::resolve_token(cli, toml, env_token)?;
        let api_url = Self::resolve_api_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let user_agent = Self::resolve_user_agent(cli, toml)?;

        Ok(Self {
            listen,
            token,
            api_url,
            timeout,
            user_agent,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, environment and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. The token
    /// environment variable is [`defaults::TOKEN_ENV`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };
        let env_token = std::env::var(defaults::TOKEN_ENV).ok();

        Self::from_raw(cli, toml.as_ref(), env_token.as_deref())
    }

    fn resolve_listen(cli: &Cli, toml: Option<&TomlConfig>) -> Result<SocketAddr, ConfigError> {
        let value = cli
            .listen
            .as_deref()
            .or_else(|| toml.and_then(|t| t.server.listen.as_deref()))
            .unwrap_or(defaults::LISTEN);

        value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidListen {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    fn resolve_token(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_token: Option<&str>,
    ) -> Result<String, ConfigError> {
        let token = cli
            .token
            .as_deref()
            .or(env_token)
            .or_else(|| toml.and_then(|t| t.github.token.as_deref()))
            .unwrap_or_default()
            .trim();

        // The provider sends "token <value>" verbatim; reject what can never be sent.
        HeaderValue::from_str(token).map_err(|e| ConfigError::InvalidHeaderValue {
            name: "token".to_string(),
            reason: e.to_string(),
        })?;

        Ok(token.to_string())
    }

    fn resolve_api_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .api_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.github.api_url.as_deref()))
            .unwrap_or(defaults::API_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.github.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_user_agent(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<HeaderValue, ConfigError> {
        let value = cli
            .user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.github.user_agent.as_deref()))
            .unwrap_or(defaults::USER_AGENT);

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidHeaderValue {
                name: "User-Agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
            name: "User-Agent".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
