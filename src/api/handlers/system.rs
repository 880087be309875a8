//! Service health handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::api::error::{ApiError, ErrorResponse};
use crate::db::{Database, TodoRepository};

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Number of stored todos, read from the store on every check
    #[schema(example = 3)]
    pub todos: usize,
}

/// Health check
///
/// Reports `ok` only when the record store answers a count query
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service and store are reachable", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let todos = state.db().todos().count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        todos,
    }))
}
