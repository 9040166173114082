//! Process-level helpers for the `repo-facade` binary.

use std::process::ExitCode;

use repo_facade::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Why the process is exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Served until shutdown, or `init` wrote its file.
    Clean,
    /// Configuration could not be loaded or written.
    Config,
    /// The runtime, listener or server failed.
    Runtime,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Clean => Self::SUCCESS,
            Exit::Config => Self::FAILURE,
            Exit::Runtime => Self::from(2),
        }
    }
}

/// Suggests a next step for configuration failures that have an obvious one.
pub fn print_config_hint(error: &ConfigError) {
    let hint = match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            "Run 'repo-facade init' to write a starter configuration file."
        }
        ConfigError::InvalidHeaderValue { name, .. } if name == "token" => {
            "The GitHub token must not contain control characters; check SECRET_GITHUB_ACCESS_TOKEN."
        }
        ConfigError::InvalidListen { .. } => "Use HOST:PORT for --listen, e.g. 127.0.0.1:8080.",
        _ => return,
    };
    eprintln!("\n{hint}");
}

/// Installs the global subscriber. `RUST_LOG` overrides the `--verbose` level.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
