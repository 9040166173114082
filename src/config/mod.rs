//! Configuration layer for repo-facade.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment** - only the token, read from `SECRET_GITHUB_ACCESS_TOKEN`
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! No field is required. A missing token resolves to the empty string; the
//! upstream then rejects each call, which surfaces as an error per request
//! rather than a startup failure.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{GithubSection, ServerSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
