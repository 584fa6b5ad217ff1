//! Response DTOs for API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use dbspace_core::DbStat;

// =============================================================================
// Health
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy")
    pub status: String,
    /// Server version
    pub version: String,
}

// =============================================================================
// Statistics
// =============================================================================

/// One row of file-level storage statistics.
///
/// The wire shape mirrors [`DbStat`] exactly; this type exists so the HTTP
/// surface (serialization + OpenAPI schema) stays in the server crate.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DbStatResponse {
    /// Logical database the file belongs to
    pub database_name: Option<String>,
    /// The file's logical name
    pub logical_file_name: Option<String>,
    /// Filegroup membership
    pub file_group: Option<String>,
    /// On-disk path of the file
    pub physical_file_name: Option<String>,
    /// File type, e.g. data vs. log
    pub file_type: Option<String>,
    /// Total reserved size in megabytes
    #[serde(rename = "AllocatedSpaceMB", with = "rust_decimal::serde::float")]
    pub allocated_space_mb: Decimal,
    /// Space actually consumed in megabytes
    #[serde(rename = "UsedSpaceMB", with = "rust_decimal::serde::float")]
    pub used_space_mb: Decimal,
    /// Allocated minus used, as reported by the source table
    #[serde(rename = "FreeSpaceMB", with = "rust_decimal::serde::float")]
    pub free_space_mb: Decimal,
    /// Used / allocated * 100, as reported by the source table
    #[serde(with = "rust_decimal::serde::float")]
    pub used_percent: Decimal,
}

impl From<DbStat> for DbStatResponse {
    fn from(s: DbStat) -> Self {
        Self {
            database_name: s.database_name,
            logical_file_name: s.logical_file_name,
            file_group: s.file_group,
            physical_file_name: s.physical_file_name,
            file_type: s.file_type,
            allocated_space_mb: s.allocated_space_mb,
            used_space_mb: s.used_space_mb,
            free_space_mb: s.free_space_mb,
            used_percent: s.used_percent,
        }
    }
}
