//! Domain model for storage utilization statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of file-level storage statistics for a database file.
///
/// Field names on the wire are the PascalCase column names of the source
/// `dbstats` table (`DatabaseName`, `AllocatedSpaceMB`, ...), so the JSON
/// produced by the server and consumed by the relay client matches the
/// table schema one to one.
///
/// String fields are nullable and carried verbatim; numeric fields are
/// never null; the query layer substitutes zero for NULL source columns.
/// `FreeSpaceMB` and `UsedPercent` come from the source table as-is and are
/// not recomputed here.
///
/// # Examples
///
/// ```
/// use dbspace_core::DbStat;
///
/// let json = r#"{
///     "DatabaseName": "Log",
///     "LogicalFileName": "Log_dat",
///     "FileGroup": "PRIMARY",
///     "PhysicalFileName": "D:\\Log.mdf",
///     "FileType": "ROWS",
///     "AllocatedSpaceMB": 1000,
///     "UsedSpaceMB": 400,
///     "FreeSpaceMB": 600,
///     "UsedPercent": 40
/// }"#;
///
/// let stat: DbStat = serde_json::from_str(json).unwrap();
/// assert_eq!(stat.database_name.as_deref(), Some("Log"));
/// assert_eq!(stat.used_percent, rust_decimal::Decimal::from(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbStat {
    /// Logical database the file belongs to.
    pub database_name: Option<String>,
    /// The file's logical name.
    pub logical_file_name: Option<String>,
    /// Filegroup membership.
    pub file_group: Option<String>,
    /// On-disk path of the file.
    pub physical_file_name: Option<String>,
    /// File type, e.g. data vs. log.
    pub file_type: Option<String>,
    /// Total reserved size in megabytes.
    #[serde(rename = "AllocatedSpaceMB", with = "rust_decimal::serde::float")]
    pub allocated_space_mb: Decimal,
    /// Space actually consumed in megabytes.
    #[serde(rename = "UsedSpaceMB", with = "rust_decimal::serde::float")]
    pub used_space_mb: Decimal,
    /// Allocated minus used, as reported by the source table.
    #[serde(rename = "FreeSpaceMB", with = "rust_decimal::serde::float")]
    pub free_space_mb: Decimal,
    /// Used / allocated * 100, as reported by the source table.
    #[serde(with = "rust_decimal::serde::float")]
    pub used_percent: Decimal,
}
