//! Statistics repository for PostgreSQL.

use futures::StreamExt;
use rust_decimal::Decimal;
use sqlx::{Connection, PgConnection};
use tracing::{error, info};

use dbspace_core::error::AppError;
use dbspace_core::models::DbStat;

/// The one query this repository runs. The column names are quoted because
/// the `dbstats` table keeps the PascalCase identifiers of the upstream
/// collection job that populates it.
const STATS_QUERY: &str = r#"SELECT "DatabaseName", "LogicalFileName", "FileGroup", "PhysicalFileName", "FileType", "AllocatedSpaceMB", "UsedSpaceMB", "FreeSpaceMB", "UsedPercent" FROM dbstats"#;

/// Repository for file-level storage statistics.
///
/// Holds the connection string rather than a pool: every [`fetch_all`]
/// call opens one connection scoped to that call, and an unconfigured
/// connection string is reported per call without ever attempting to
/// connect. This keeps the server bootable before its database is
/// configured.
///
/// [`fetch_all`]: StatsRepository::fetch_all
///
/// # Examples
///
/// ```no_run
/// use dbspace_db::StatsRepository;
///
/// # async fn example() -> Result<(), dbspace_core::AppError> {
/// let repo = StatsRepository::new(Some("postgresql://localhost/stats".to_string()));
/// let stats = repo.fetch_all("alice").await?;
/// println!("{} files tracked", stats.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StatsRepository {
    database_url: Option<String>,
}

impl StatsRepository {
    /// Creates a repository from an optional connection string.
    ///
    /// An empty or whitespace-only string counts as unconfigured.
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url: database_url.filter(|url| !url.trim().is_empty()),
        }
    }

    /// Returns every row of the statistics table, in result-set order.
    ///
    /// An empty table is a valid empty result, not an error. `caller` is
    /// the already-authenticated identity supplied by the endpoint layer;
    /// it is only used for the audit log line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConnectionStringMissing`] when no connection
    /// string is configured (no connection is attempted), and
    /// [`AppError::DataSource`] for any connection, query, or row-read
    /// failure. Every failure is also logged with the number of records
    /// read up to that point.
    pub async fn fetch_all(&self, caller: &str) -> Result<Vec<DbStat>, AppError> {
        let url = self
            .database_url
            .as_deref()
            .ok_or(AppError::ConnectionStringMissing)?;

        // One connection per call. Every return path below drops it, which
        // closes it.
        let mut conn = PgConnection::connect(url).await.map_err(|e| {
            error!(error = %e, records_read = 0usize, "failed to connect to statistics database");
            AppError::DataSource(e)
        })?;

        let mut rows = sqlx::query_as::<_, StatRow>(STATS_QUERY).fetch(&mut conn);

        let mut stats: Vec<DbStat> = Vec::new();
        while let Some(row) = rows.next().await {
            match row {
                Ok(row) => stats.push(row.into()),
                Err(e) => {
                    error!(
                        error = %e,
                        records_read = stats.len(),
                        "failed while reading storage statistics"
                    );
                    return Err(AppError::DataSource(e));
                }
            }
        }

        info!(records = stats.len(), caller, "retrieved storage statistics");
        Ok(stats)
    }

    /// Checks connectivity by executing a trivial query on a fresh
    /// connection.
    pub async fn health_check(&self) -> Result<(), AppError> {
        let url = self
            .database_url
            .as_deref()
            .ok_or(AppError::ConnectionStringMissing)?;

        let mut conn = PgConnection::connect(url).await?;
        sqlx::query("SELECT 1").execute(&mut conn).await?;
        Ok(())
    }
}

/// Helper struct for deserializing statistics rows. Numeric columns stay
/// optional here; the NULL-to-zero substitution happens in the mapping.
#[derive(sqlx::FromRow)]
struct StatRow {
    #[sqlx(rename = "DatabaseName")]
    database_name: Option<String>,
    #[sqlx(rename = "LogicalFileName")]
    logical_file_name: Option<String>,
    #[sqlx(rename = "FileGroup")]
    file_group: Option<String>,
    #[sqlx(rename = "PhysicalFileName")]
    physical_file_name: Option<String>,
    #[sqlx(rename = "FileType")]
    file_type: Option<String>,
    #[sqlx(rename = "AllocatedSpaceMB")]
    allocated_space_mb: Option<Decimal>,
    #[sqlx(rename = "UsedSpaceMB")]
    used_space_mb: Option<Decimal>,
    #[sqlx(rename = "FreeSpaceMB")]
    free_space_mb: Option<Decimal>,
    #[sqlx(rename = "UsedPercent")]
    used_percent: Option<Decimal>,
}

impl From<StatRow> for DbStat {
    fn from(row: StatRow) -> Self {
        DbStat {
            database_name: row.database_name,
            logical_file_name: row.logical_file_name,
            file_group: row.file_group,
            physical_file_name: row.physical_file_name,
            file_type: row.file_type,
            allocated_space_mb: row.allocated_space_mb.unwrap_or(Decimal::ZERO),
            used_space_mb: row.used_space_mb.unwrap_or(Decimal::ZERO),
            free_space_mb: row.free_space_mb.unwrap_or(Decimal::ZERO),
            used_percent: row.used_percent.unwrap_or(Decimal::ZERO),
        }
    }
}
