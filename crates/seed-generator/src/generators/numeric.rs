//! Numeric value generators.

use rand::Rng;

/// Lower bound for plausible body weights, in kilograms.
pub const WEIGHT_MIN_KG: f64 = 45.0;

/// Upper bound for plausible body weights, in kilograms.
pub const WEIGHT_MAX_KG: f64 = 200.0;

/// Draw a body weight uniformly from the plausible range, rounded to one
/// decimal place.
pub fn weight_kg<R: Rng>(rng: &mut R) -> f64 {
    round1(rng.random_range(WEIGHT_MIN_KG..=WEIGHT_MAX_KG))
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
