//! Library surface of the mock-seed binary.
//!
//! Only the CLI definition lives here so integration tests can exercise
//! argument parsing without spawning the binary.

pub mod cli;

pub use cli::{Cli, OutputMethod};
