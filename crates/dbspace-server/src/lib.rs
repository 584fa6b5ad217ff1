//! dbspace Server - REST API for storage statistics.
//!
//! This crate exposes the statistics query layer over HTTP:
//!
//! - **Statistics**: `GET /api/DbStats`, the full contents of the
//!   statistics table for allow-listed callers
//! - **Health**: `GET /health`, process liveness
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use auth::AuthPolicy;
pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
