//! Synthetic data generator for mock-seed.
//!
//! This crate provides the [`DataGenerator`] which produces batches of
//! synthetic user and weight-log records. The generator uses a seeded RNG
//! so the same seed always yields the same batch.
//!
//! # Example
//!
//! ```rust
//! use seed_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::new(42);
//! let data = generator.generate(2, 3);
//!
//! assert_eq!(data.users.len(), 2);
//! assert_eq!(data.weights.len(), 6);
//! ```

pub mod generator;
pub mod generators;

pub use generator::DataGenerator;
