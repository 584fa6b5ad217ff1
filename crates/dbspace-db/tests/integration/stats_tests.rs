//! Integration tests for StatsRepository.
//!
//! These tests verify the query and mapping behavior against a real
//! PostgreSQL database. Each test runs in an isolated container.

use rust_decimal::Decimal;

use dbspace_db::StatsRepository;

use crate::integration::common::{insert_stat, setup_test_db};

#[tokio::test]
async fn test_fetch_all_empty_table_returns_empty_sequence() {
    let (url, _container) = setup_test_db().await;
    let repo = StatsRepository::new(Some(url));

    let stats = repo
        .fetch_all("tester")
        .await
        .expect("empty table should not be an error");

    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_fetch_all_maps_a_full_row() {
    let (url, _container) = setup_test_db().await;
    insert_stat(
        &url,
        Some("Log"),
        Some("Log_dat"),
        Some("PRIMARY"),
        Some(r"D:\Log.mdf"),
        Some("ROWS"),
        Some(1000),
        Some(400),
        Some(600),
        Some(40),
    )
    .await;

    let repo = StatsRepository::new(Some(url));
    let stats = repo.fetch_all("tester").await.expect("fetch should succeed");

    assert_eq!(stats.len(), 1);
    let stat = &stats[0];
    assert_eq!(stat.database_name.as_deref(), Some("Log"));
    assert_eq!(stat.logical_file_name.as_deref(), Some("Log_dat"));
    assert_eq!(stat.file_group.as_deref(), Some("PRIMARY"));
    assert_eq!(stat.physical_file_name.as_deref(), Some(r"D:\Log.mdf"));
    assert_eq!(stat.file_type.as_deref(), Some("ROWS"));
    assert_eq!(stat.allocated_space_mb, Decimal::from(1000));
    assert_eq!(stat.used_space_mb, Decimal::from(400));
    assert_eq!(stat.free_space_mb, Decimal::from(600));
    assert_eq!(stat.used_percent, Decimal::from(40));
}

#[tokio::test]
async fn test_fetch_all_substitutes_zero_for_null_numerics() {
    let (url, _container) = setup_test_db().await;
    insert_stat(
        &url,
        Some("Orphan"),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    )
    .await;

    let repo = StatsRepository::new(Some(url));
    let stats = repo.fetch_all("tester").await.expect("fetch should succeed");

    assert_eq!(stats.len(), 1);
    let stat = &stats[0];
    // NULL numerics become zero, never an error and never a null marker.
    assert_eq!(stat.allocated_space_mb, Decimal::ZERO);
    assert_eq!(stat.used_space_mb, Decimal::ZERO);
    assert_eq!(stat.free_space_mb, Decimal::ZERO);
    assert_eq!(stat.used_percent, Decimal::ZERO);
    // NULL strings map to None verbatim.
    assert_eq!(stat.logical_file_name, None);
    assert_eq!(stat.file_type, None);
    assert_eq!(stat.database_name.as_deref(), Some("Orphan"));
}

#[tokio::test]
async fn test_fetch_all_returns_every_row() {
    let (url, _container) = setup_test_db().await;
    for name in ["Log", "Sales", "Archive"] {
        insert_stat(
            &url,
            Some(name),
            Some(&format!("{}_dat", name)),
            Some("PRIMARY"),
            None,
            Some("ROWS"),
            Some(100),
            Some(50),
            Some(50),
            Some(50),
        )
        .await;
    }

    let repo = StatsRepository::new(Some(url));
    let stats = repo.fetch_all("tester").await.expect("fetch should succeed");

    // No filtering, no deduplication: all rows come back.
    assert_eq!(stats.len(), 3);
    let names: Vec<_> = stats
        .iter()
        .map(|s| s.database_name.as_deref().unwrap_or_default())
        .collect();
    for name in ["Log", "Sales", "Archive"] {
        assert!(names.contains(&name), "missing row for {}", name);
    }
}

#[tokio::test]
async fn test_health_check() {
    let (url, _container) = setup_test_db().await;
    let repo = StatsRepository::new(Some(url));

    repo.health_check().await.expect("database should be reachable");
}
