//! HTTP surface exposing the repository service.
//!
//! Routes:
//! - `GET /marco`: liveness probe, answers `polo`
//! - `POST /repositories`: creates a repository from `{name, description}`

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::github::RepoProvider;
use crate::service::{ApiError, CreateRepoInput, RepoCreated, RepositoryService};


/// Body answered by the liveness probe.
pub const POLO: &str = "polo";

/// Builds the application router around a shared service.
pub fn router<P>(service: Arc<RepositoryService<P>>) -> Router
where
    P: RepoProvider + 'static,
{
    Router::new()
        .route("/marco", get(marco))
        .route("/repositories", post(create_repo::<P>))
        .with_state(service)
}

async fn marco() -> &'static str {
    POLO
}

async fn create_repo<P>(
    State(service): State<Arc<RepositoryService<P>>>,
    input: Result<Json<CreateRepoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RepoCreated>), ApiError>
where
    P: RepoProvider + 'static,
{
    let Json(input) = input.map_err(|e| {
        tracing::debug!("Rejected request body: {e}");
        ApiError::bad_request("invalid json body")
    })?;

    let created = service.create_repo(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
