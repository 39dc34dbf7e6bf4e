//! Pretty-printed JSON document writer.

use crate::error::JsonSinkError;
use seed_core::MockData;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Default output filename for the `json` output method.
pub const DEFAULT_OUTPUT_FILE: &str = "mock_data.json";

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct SinkMetrics {
    /// Number of user records written.
    pub users_written: u64,
    /// Number of weight records written.
    pub weights_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Write a generated batch to `path` as one pretty-printed JSON document.
///
/// Any existing file at `path` is truncated first.
pub fn write_json<P: AsRef<Path>>(
    data: &MockData,
    path: P,
) -> Result<SinkMetrics, JsonSinkError> {
    let start_time = Instant::now();
    let path = path.as_ref();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    drop(writer);

    let metrics = SinkMetrics {
        users_written: data.users.len() as u64,
        weights_written: data.weights.len() as u64,
        file_size_bytes: std::fs::metadata(path)?.len(),
        total_duration: start_time.elapsed(),
    };

    info!(
        "Generated {} users and {} weights in {} ({} bytes in {:?})",
        metrics.users_written,
        metrics.weights_written,
        path.display(),
        metrics.file_size_bytes,
        metrics.total_duration
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::MockData;
    use seed_generator::DataGenerator;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_reparse() {
        let data = DataGenerator::new(42).generate(3, 4);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mock_data.json");

        let metrics = write_json(&data, &path).unwrap();
        assert_eq!(metrics.users_written, 3);
        assert_eq!(metrics.weights_written, 12);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: MockData = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_document_shape() {
        let data = DataGenerator::new(42).generate(1, 1);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mock_data.json");
        write_json(&data, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed, not a single line.
        assert!(content.lines().count() > 1);

        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        let user = &json["Users"][0];
        for key in [
            "UserUid",
            "FirstName",
            "LastName",
            "CreationDate",
            "DOB",
            "Email",
            "Phone",
            "StartWeight",
        ] {
            assert!(user.get(key).is_some(), "missing user key {key}");
        }
        let weight = &json["Weights"][0];
        for key in ["LogDate", "Value", "UserId"] {
            assert!(weight.get(key).is_some(), "missing weight key {key}");
        }
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mock_data.json");
        std::fs::write(&path, "not json").unwrap();

        let data = DataGenerator::new(42).generate(2, 2);
        write_json(&data, &path).unwrap();

        let parsed: MockData =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.users.len(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mock_data.json");

        let metrics = write_json(&MockData::default(), &path).unwrap();
        assert_eq!(metrics.users_written, 0);
        assert_eq!(metrics.weights_written, 0);

        let parsed: MockData =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.users.is_empty());
        assert!(parsed.weights.is_empty());
    }
}
