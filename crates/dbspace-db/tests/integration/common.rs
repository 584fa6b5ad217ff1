//! Test utilities for integration tests.
//!
//! Provides helper functions to set up isolated PostgreSQL containers
//! with the `dbstats` table for each test.

use sqlx::{Connection, PgConnection};
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

/// SQL migrations to initialize the test database schema. The table keeps
/// the PascalCase column names of the production statistics table.
const MIGRATIONS: &[&str] = &[r#"CREATE TABLE IF NOT EXISTS dbstats (
        "DatabaseName" TEXT,
        "LogicalFileName" TEXT,
        "FileGroup" TEXT,
        "PhysicalFileName" TEXT,
        "FileType" TEXT,
        "AllocatedSpaceMB" NUMERIC(18,2),
        "UsedSpaceMB" NUMERIC(18,2),
        "FreeSpaceMB" NUMERIC(18,2),
        "UsedPercent" NUMERIC(18,2)
    )"#];

/// Sets up a PostgreSQL container and returns its connection string.
///
/// Each call creates a fresh, isolated database container. The container
/// is automatically cleaned up when the returned `ContainerAsync` is
/// dropped, so keep it alive for the test duration.
pub async fn setup_test_db() -> (String, ContainerAsync<GenericImage>) {
    let container = GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "postgres")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let connection_string = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

    // Connect with retry logic for container startup
    const MAX_RETRIES: u32 = 30;
    let mut retries = 0;
    let mut conn = loop {
        match PgConnection::connect(&connection_string).await {
            Ok(conn) => break conn,
            Err(e) => {
                retries += 1;
                if retries >= MAX_RETRIES {
                    panic!(
                        "Failed to connect to database after {} retries: {}",
                        MAX_RETRIES, e
                    );
                }
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }
    };

    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(&mut conn)
            .await
            .expect("Failed to run migration");
    }

    (connection_string, container)
}

/// Inserts one statistics row. `None` values become SQL NULLs, which is
/// what the mapping tests need to exercise.
pub async fn insert_stat(
    connection_string: &str,
    database_name: Option<&str>,
    logical_file_name: Option<&str>,
    file_group: Option<&str>,
    physical_file_name: Option<&str>,
    file_type: Option<&str>,
    allocated_space_mb: Option<i64>,
    used_space_mb: Option<i64>,
    free_space_mb: Option<i64>,
    used_percent: Option<i64>,
) {
    let mut conn = PgConnection::connect(connection_string)
        .await
        .expect("Failed to connect for seeding");

    sqlx::query(
        r#"INSERT INTO dbstats ("DatabaseName", "LogicalFileName", "FileGroup", "PhysicalFileName", "FileType", "AllocatedSpaceMB", "UsedSpaceMB", "FreeSpaceMB", "UsedPercent")
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
    )
    .bind(database_name)
    .bind(logical_file_name)
    .bind(file_group)
    .bind(physical_file_name)
    .bind(file_type)
    .bind(allocated_space_mb.map(rust_decimal::Decimal::from))
    .bind(used_space_mb.map(rust_decimal::Decimal::from))
    .bind(free_space_mb.map(rust_decimal::Decimal::from))
    .bind(used_percent.map(rust_decimal::Decimal::from))
    .execute(&mut conn)
    .await
    .expect("Failed to seed statistics row");
}
