//! Core types for mock-seed.
//!
//! This crate defines the in-memory shape of a generated seed batch
//! ([`MockData`] holding [`User`] and [`WeightEntry`] records) and the
//! database connection configuration ([`DbConfig`]) loaded from a JSON file.
//!
//! Serde field names follow the external contract used by both sinks:
//! `UserUid`, `FirstName`, `LastName`, `CreationDate`, `DOB`, `Email`,
//! `Phone`, `StartWeight` for users; `LogDate`, `Value`, `UserId` for
//! weight entries.

pub mod config;
pub mod model;

pub use config::{ConfigError, DbConfig};
pub use model::{MockData, User, WeightEntry};
