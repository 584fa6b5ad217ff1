//! dbspace Client - Relay client for the statistics API.
//!
//! [`StatsClient`] calls the `GET /api/DbStats` endpoint exposed by
//! `dbspace-server`, decodes the response, and normalizes failures under a
//! strict policy: transport failures propagate, everything else degrades to
//! an empty result. See [`StatsClient::fetch_all`] for the exact rules.

mod stats;

pub use stats::StatsClient;
