//! dbspace DB - Query layer for the storage statistics table.
//!
//! The main component is [`StatsRepository`], which executes the fixed
//! read-only query against the `dbstats` table and maps each row to a
//! [`dbspace_core::DbStat`].

mod repository;

pub use repository::StatsRepository;
