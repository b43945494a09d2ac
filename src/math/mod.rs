mod vec;

pub use vec::*;

/// Tolerance for every near-zero / near-equal scalar test in the crate.
///
/// The vector algebra and the quadratic root classifier share this single
/// constant so classification boundaries stay consistent between them.
pub const EPSILON: f64 = 1e-9;

/// Epsilon-tolerant scalar equality.
#[inline]
pub fn equals(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
