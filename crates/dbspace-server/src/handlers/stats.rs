//! Storage statistics endpoint.

use axum::{extract::State, Extension, Json};

use crate::auth::CallerIdentity;
use crate::dto::DbStatResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Get storage statistics.
///
/// Returns one row per database file from the statistics table. The caller
/// identity comes from the authorization middleware and is passed down for
/// the audit log.
#[utoipa::path(
    get,
    path = "/api/DbStats",
    responses(
        (status = 200, description = "Storage statistics per database file", body = [DbStatResponse]),
        (status = 401, description = "Caller identity missing"),
        (status = 403, description = "Caller not in the allow-list"),
        (status = 500, description = "Configuration or data-source error"),
    ),
    tag = "stats"
)]
pub async fn get_db_stats(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> Result<Json<Vec<DbStatResponse>>, ApiError> {
    let stats = state
        .stats_repo
        .fetch_all(&caller.0)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(stats.into_iter().map(DbStatResponse::from).collect()))
}
