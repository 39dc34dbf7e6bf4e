//! Command-line interface for mock-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Write 10 users with 5 weight entries each to mock_data.json
//! mock-seed 10 5 json
//!
//! # Same batch, different file and seed
//! mock-seed 10 5 json --out seed.json --seed 7
//!
//! # Insert into PostgreSQL using parameters from db_config.json,
//! # creating the tables first
//! mock-seed 10 5 psql --create-tables
//!
//! # Reset a previously seeded database before inserting
//! mock-seed 10 5 psql --drop-tables --create-tables
//! ```
//!
//! `db_config.json` holds the connection parameters:
//!
//! ```json
//! {"host": "localhost", "port": 5432, "dbname": "weights_dev",
//!  "user": "postgres", "password": "postgres"}
//! ```

use anyhow::Context;
use clap::Parser;
use mock_seed::{Cli, OutputMethod};
use seed_core::DbConfig;
use seed_generator::DataGenerator;
use seed_sink_postgresql::PostgresSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut generator = DataGenerator::new(cli.seed);
    let data = generator.generate(cli.num_users, cli.num_weights_per_user);

    tracing::info!(
        "Generated {} users and {} weights (seed={})",
        data.users.len(),
        data.weights.len(),
        generator.seed()
    );

    match cli.output_method {
        OutputMethod::Json => {
            seed_sink_json::write_json(&data, &cli.out)
                .with_context(|| format!("Failed to write {:?}", cli.out))?;
        }
        OutputMethod::Psql => {
            let config = DbConfig::from_file(&cli.db_config)
                .with_context(|| format!("Failed to load db config from {:?}", cli.db_config))?;

            let mut sink = PostgresSink::connect(&config)
                .await
                .context("Failed to connect to PostgreSQL")?;

            if cli.drop_tables {
                sink.drop_tables().await.context("Failed to drop tables")?;
            }

            if cli.create_tables {
                sink.create_tables()
                    .await
                    .context("Failed to create tables")?;
            }

            sink.insert_all(&data)
                .await
                .context("Failed to insert seed data")?;
        }
    }

    Ok(())
}
