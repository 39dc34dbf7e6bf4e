//! Database connection configuration.
//!
//! Connection parameters live in a JSON file (`db_config.json` by default)
//! so the same file can be shared with other seeding tools pointed at the
//! same development database.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default connection parameter file consumed by the `psql` output method.
pub const DEFAULT_DB_CONFIG_FILE: &str = "db_config.json";

fn default_port() -> u16 {
    5432
}

/// Errors raised while loading a [`DbConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON or is missing required fields.
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// PostgreSQL connection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub dbname: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
}

impl DbConfig {
    /// Load connection parameters from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse connection parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = DbConfig::from_json(
            r#"{
                "host": "localhost",
                "port": 5433,
                "dbname": "weights_dev",
                "user": "postgres",
                "password": "postgres"
            }"#,
        )
        .unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5433);
        assert_eq!(config.dbname, "weights_dev");
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "postgres");
    }

    #[test]
    fn test_port_and_password_default() {
        let config = DbConfig::from_json(
            r#"{"host": "db.internal", "dbname": "weights", "user": "seeder"}"#,
        )
        .unwrap();

        assert_eq!(config.port, 5432);
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result = DbConfig::from_json(r#"{"host": "localhost"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("db_config.json");
        fs::write(
            &path,
            r#"{"host": "localhost", "dbname": "weights", "user": "postgres"}"#,
        )
        .unwrap();

        let config = DbConfig::from_file(&path).unwrap();
        assert_eq!(config.dbname, "weights");
    }

    #[test]
    fn test_from_file_missing() {
        let result = DbConfig::from_file("/nonexistent/db_config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
