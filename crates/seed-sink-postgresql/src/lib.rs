//! PostgreSQL sink for mock-seed.
//!
//! Opens one connection, inserts the generated users and their weight
//! entries inside a single transaction, and commits once at the end. The
//! numeric `"UserId"` assigned by the database is captured per user via
//! `RETURNING` and used to tag that user's weight rows.
//!
//! # Example
//!
//! ```ignore
//! use seed_core::DbConfig;
//! use seed_sink_postgresql::PostgresSink;
//!
//! let config = DbConfig::from_file("db_config.json")?;
//! let mut sink = PostgresSink::connect(&config).await?;
//! let metrics = sink.insert_all(&data).await?;
//! println!("Inserted {} users", metrics.users_inserted);
//! ```

pub mod ddl;
pub mod error;
pub mod sink;

pub use error::PostgresSinkError;
pub use sink::{InsertMetrics, PostgresSink};
