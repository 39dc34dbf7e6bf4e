//! Individual value generators.
//!
//! Each submodule produces one kind of field value from a caller-supplied
//! RNG, so the whole batch stays deterministic for a given seed.

pub mod date;
pub mod numeric;
pub mod person;
pub mod uuid;
