//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate synthetic user and weight-log seed data.
#[derive(Parser, Debug)]
#[command(name = "mock-seed")]
#[command(about = "Generates synthetic user and weight-log data for development databases")]
#[command(long_about = None)]
pub struct Cli {
    /// Number of users to generate
    pub num_users: u64,

    /// Number of weight entries per user to generate
    pub num_weights_per_user: u64,

    /// Where to write the generated data
    #[arg(value_enum)]
    pub output_method: OutputMethod,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output file for the json method
    #[arg(long, short = 'o', default_value = seed_sink_json::DEFAULT_OUTPUT_FILE)]
    pub out: PathBuf,

    /// Connection parameter file for the psql method
    #[arg(long, env = "DB_CONFIG", default_value = seed_core::config::DEFAULT_DB_CONFIG_FILE)]
    pub db_config: PathBuf,

    /// Create the Users and Weights tables before inserting (psql only)
    #[arg(long)]
    pub create_tables: bool,

    /// Drop the Users and Weights tables before inserting (psql only)
    #[arg(long)]
    pub drop_tables: bool,
}

/// Supported output sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMethod {
    /// Write to a JSON file
    #[value(name = "json")]
    Json,
    /// Write to a PostgreSQL database
    #[value(name = "psql")]
    Psql,
}
