//! JSON file sink for mock-seed.
//!
//! Writes a generated batch as a single pretty-printed JSON document,
//! overwriting any existing file. There is no partial-write protection; a
//! failed run leaves whatever was flushed.
//!
//! # Example
//!
//! ```ignore
//! use seed_sink_json::write_json;
//!
//! let metrics = write_json(&data, "mock_data.json")?;
//! println!("Wrote {} bytes", metrics.file_size_bytes);
//! ```

pub mod error;
pub mod sink;

pub use error::JsonSinkError;
pub use sink::{write_json, SinkMetrics, DEFAULT_OUTPUT_FILE};
