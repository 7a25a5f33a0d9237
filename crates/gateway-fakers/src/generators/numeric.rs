//! Numeric value generators.

use rand::Rng;

/// Generate a money amount in the given range, rounded to cents.
pub fn generate_amount<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value = rng.random_range(min..=max);
    ((value * 100.0).round() / 100.0).clamp(min, max)
}
