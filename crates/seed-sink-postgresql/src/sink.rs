//! Transactional insert of a generated batch.

use crate::ddl;
use crate::error::PostgresSinkError;
use seed_core::{DbConfig, MockData};
use std::time::{Duration, Instant};
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

const INSERT_USER: &str = r#"INSERT INTO "Users" (
    "UserUid", "FirstName", "LastName", "CreationDate", "DOB",
    "Email", "Phone", "StartWeight")
VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING "UserId""#;

const INSERT_WEIGHT: &str =
    r#"INSERT INTO "Weights" ("LogDate", "Value", "UserId") VALUES ($1, $2, $3)"#;

/// Metrics from an insert operation.
#[derive(Debug, Clone, Default)]
pub struct InsertMetrics {
    /// Number of user rows inserted.
    pub users_inserted: u64,
    /// Number of weight rows inserted.
    pub weights_inserted: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// PostgreSQL sink that owns one connection for the duration of a run.
pub struct PostgresSink {
    client: Client,
}

impl PostgresSink {
    /// Open a connection using the given parameters.
    ///
    /// The connection task is spawned in the background; a `SELECT 1` smoke
    /// query verifies the connection before any data is sent.
    pub async fn connect(config: &DbConfig) -> Result<Self, PostgresSinkError> {
        let (client, connection) = pg_config(config).connect(NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        client.simple_query("SELECT 1").await?;

        Ok(Self { client })
    }

    /// Create the `"Users"` and `"Weights"` tables if they do not exist.
    pub async fn create_tables(&self) -> Result<(), PostgresSinkError> {
        info!("Creating tables \"Users\" and \"Weights\"");
        self.client.execute(&ddl::create_users_table(), &[]).await?;
        self.client
            .execute(&ddl::create_weights_table(), &[])
            .await?;
        Ok(())
    }

    /// Drop the `"Weights"` and `"Users"` tables.
    pub async fn drop_tables(&self) -> Result<(), PostgresSinkError> {
        for sql in ddl::drop_tables() {
            self.client.execute(&sql, &[]).await?;
        }
        Ok(())
    }

    /// Insert a generated batch inside a single transaction.
    ///
    /// Users are inserted one by one; each insert returns the assigned
    /// `"UserId"`, which tags that user's weight rows. The transaction is
    /// committed once at the end. On any error it is dropped uncommitted,
    /// which rolls it back on the server.
    pub async fn insert_all(
        &mut self,
        data: &MockData,
    ) -> Result<InsertMetrics, PostgresSinkError> {
        let start_time = Instant::now();
        let mut metrics = InsertMetrics::default();

        check_user_indexes(data)?;

        info!(
            "Inserting {} users and {} weights",
            data.users.len(),
            data.weights.len()
        );

        let tx = self.client.transaction().await?;
        let user_stmt = tx.prepare(INSERT_USER).await?;
        let weight_stmt = tx.prepare(INSERT_WEIGHT).await?;

        for (user_index, user) in data.users.iter().enumerate() {
            let row = tx
                .query_one(
                    &user_stmt,
                    &[
                        &user.user_uid,
                        &user.first_name,
                        &user.last_name,
                        &user.creation_date,
                        &user.dob,
                        &user.email,
                        &user.phone,
                        &user.start_weight,
                    ],
                )
                .await?;
            let user_id: i32 = row.get(0);
            metrics.users_inserted += 1;

            for weight in data.weights_for(user_index) {
                tx.execute(&weight_stmt, &[&weight.log_date, &weight.value, &user_id])
                    .await?;
                metrics.weights_inserted += 1;
            }

            debug!("Inserted user {} with UserId {}", user_index, user_id);
        }

        tx.commit().await?;
        metrics.total_duration = start_time.elapsed();

        info!(
            "Inserted {} users and {} weights into the database in {:?}",
            metrics.users_inserted, metrics.weights_inserted, metrics.total_duration
        );

        Ok(metrics)
    }
}

/// Reject batches whose weight entries reference a user index outside the
/// batch, before anything is sent to the database.
fn check_user_indexes(data: &MockData) -> Result<(), PostgresSinkError> {
    match data.weights.iter().find(|w| w.user_index >= data.users.len()) {
        Some(entry) => Err(PostgresSinkError::DanglingUserIndex(entry.user_index)),
        None => Ok(()),
    }
}

/// Build a typed connection config from the loaded parameters.
fn pg_config(config: &DbConfig) -> tokio_postgres::Config {
    let mut pg = tokio_postgres::Config::new();
    pg.host(&config.host)
        .port(config.port)
        .dbname(&config.dbname)
        .user(&config.user)
        .password(&config.password);
    pg
}
