//! Application execution logic.
//!
//! Wires the transport, provider and service from the validated
//! configuration and serves the HTTP routes until a shutdown signal.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use repo_facade::config::ValidatedConfig;
use repo_facade::github::GithubProvider;
use repo_facade::server;
use repo_facade::service::RepositoryService;
use repo_facade::transport::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the upstream HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to bind the listen address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that could not be bound
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the repository service described by `config`.
///
/// # Errors
///
/// Returns [`RunError::ClientBuild`] if the HTTP client cannot be created.
pub fn build_service(
    config: &ValidatedConfig,
) -> Result<RepositoryService<GithubProvider<ReqwestClient>>, RunError> {
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::ClientBuild)?;
    let provider = GithubProvider::new(client, config.api_url.clone())
        .with_user_agent(config.user_agent.clone());

    Ok(RepositoryService::new(provider, config.token.clone()))
}

/// Serves the application until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The listen address cannot be bound
/// - The server fails while running
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires
/// a real socket and signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    if config.token.is_empty() {
        tracing::warn!("No GitHub access token configured; upstream calls will be rejected");
    }

    let service = Arc::new(build_service(&config)?);
    let app = server::router(service);

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| RunError::Bind {
            addr: config.listen,
            source,
        })?;
    tracing::info!("Listening on http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(RunError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C, or SIGTERM on Unix).
///
/// If a handler cannot be installed, that signal source is ignored.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, stopping...");
}
