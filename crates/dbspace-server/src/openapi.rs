//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{DbStatResponse, HealthResponse};
use crate::handlers::{health, stats};

/// OpenAPI documentation for the dbspace API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dbspace API",
        version = "1.0.0",
        description = "Storage utilization statistics for database files.

The server reports one row per database file from the statistics table,
including allocated, used, and free space in megabytes.

## Quick Start

1. Check server health: `GET /health`
2. Fetch statistics: `GET /api/DbStats` (requires an allow-listed identity)
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:7001", description = "Local development server")
    ),
    paths(health::health_check, stats::get_db_stats),
    components(schemas(HealthResponse, DbStatResponse)),
    tags(
        (name = "system", description = "System health"),
        (name = "stats", description = "Storage statistics"),
    )
)]
pub struct ApiDoc;
