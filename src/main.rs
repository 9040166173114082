//! repo-facade: serves `POST /repositories` and forwards each request to
//! GitHub's create-repository API with a configured access token.

use std::path::Path;
use std::process::ExitCode;

use repo_facade::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{Exit, print_config_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let exit = match &cli.command {
        Some(Command::Init { output }) => init(output),
        None => serve(&cli),
    };
    exit.into()
}

/// Writes the configuration template to `output`.
fn init(output: &Path) -> Exit {
    if let Err(e) = write_default_config(output) {
        eprintln!("Could not write {}: {e}", output.display());
        return Exit::Config;
    }
    println!("Wrote configuration template to {}", output.display());
    Exit::Clean
}

/// Loads configuration and serves until a shutdown signal arrives.
#[cfg(not(tarpaulin_include))]
fn serve(cli: &Cli) -> Exit {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return Exit::Config;
        }
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start the async runtime: {e}");
            return Exit::Runtime;
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(()) => Exit::Clean,
        Err(e) => {
            tracing::error!("Server stopped with an error: {e}");
            Exit::Runtime
        }
    }
}
