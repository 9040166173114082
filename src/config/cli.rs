//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// repo-facade: create GitHub repositories through a local HTTP endpoint
///
/// Serves `POST /repositories` and forwards each request to the GitHub API
/// using a stored personal access token.
#[derive(Debug, Parser)]
#[command(name = "repo-facade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub listen: Option<String>,

    /// GitHub personal access token (overrides $SECRET_GITHUB_ACCESS_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Upstream URL used to create repositories
    #[arg(long = "api-url")]
    pub api_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent sent to the upstream API
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for repo-facade
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "repo-facade.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
