//! dbspace - Terminal front end for the storage statistics API.
//!
//! Fetches the statistics endpoint through the relay client and renders
//! one table row per database file.

mod config;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dbspace_client::StatsClient;
use dbspace_core::DbStat;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::parse();

    let client = StatsClient::new(&config.api_url, config.user.as_deref())
        .context("Invalid statistics API configuration")?;

    info!("Fetching storage statistics from {}", config.api_url);

    // Transport failures propagate here (strict relay policy); everything
    // else arrives as an empty table.
    let stats = client
        .fetch_all()
        .await
        .with_context(|| format!("Unable to reach the statistics API at {}", config.api_url))?;

    print_stats(&stats);

    Ok(())
}

/// Renders the statistics as a fixed-width table.
fn print_stats(stats: &[DbStat]) {
    if stats.is_empty() {
        println!("\nNo storage statistics available.\n");
        return;
    }

    println!("\nStorage utilization ({} files)\n", stats.len());
    println!(
        "{:<20} {:<20} {:<12} {:<8} {:>14} {:>12} {:>12} {:>8}",
        "Database", "Logical file", "Filegroup", "Type", "Allocated MB", "Used MB", "Free MB", "Used %"
    );
    println!("{}", "-".repeat(112));

    for stat in stats {
        println!(
            "{:<20} {:<20} {:<12} {:<8} {:>14} {:>12} {:>12} {:>8}",
            dash(stat.database_name.as_deref()),
            dash(stat.logical_file_name.as_deref()),
            dash(stat.file_group.as_deref()),
            dash(stat.file_type.as_deref()),
            stat.allocated_space_mb,
            stat.used_space_mb,
            stat.free_space_mb,
            stat.used_percent,
        );
    }

    let allocated: Decimal = stats.iter().map(|s| s.allocated_space_mb).sum();
    let used: Decimal = stats.iter().map(|s| s.used_space_mb).sum();
    println!("{}", "-".repeat(112));
    println!(
        "{:<62} {:>14} {:>12}",
        "Total", allocated, used
    );
    println!();
}

/// Placeholder for nullable columns in the table.
fn dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
