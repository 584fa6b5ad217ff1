//! Health check endpoint.

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint.
///
/// Reports process liveness only; it does not probe the database, so an
/// unconfigured server still answers healthy.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(
    State(_state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
