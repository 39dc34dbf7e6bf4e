//! Error types for the PostgreSQL sink.

use thiserror::Error;

/// Errors that can occur while inserting seed data into PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgresSinkError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// A weight entry referenced a user index outside the batch.
    #[error("Weight entry references unknown user index {0}")]
    DanglingUserIndex(usize),
}
