//! dbspace Core - Domain types, error taxonomy, and shared configuration.
//!
//! This crate provides the pieces shared by every dbspace component:
//!
//! - **Domain model**: [`DbStat`], one row of file-level storage statistics
//! - **Error handling**: [`AppError`], the application-wide error type
//! - **Configuration**: [`HttpConfig`] for the outbound HTTP client
//!
//! The server (`dbspace-server`) and the relay client (`dbspace-client`)
//! both speak in `Vec<DbStat>`, so the wire contract lives here exactly
//! once.

pub mod config;
pub mod error;
pub mod models;

// Configuration
pub use config::{HttpConfig, DEFAULT_API_BASE_URL, IDENTITY_HEADER};

// Error handling
pub use error::AppError;

// Domain models
pub use models::DbStat;
