//! Epsilon-aware comparisons.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

use num_traits::Float;

/// Default comparison tolerance for path computations.
///
/// Matched to single-precision playfield coordinates: values closer than
/// this are treated as coincident by the arc fitter and the arc-length
/// interpolator.
pub const FLOAT_EPSILON: f64 = 1e-3;

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn almost_equal<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Returns `true` if `v` is within `eps` of zero.
#[inline]
pub fn almost_zero<F: Float>(v: F, eps: F) -> bool {
    v.abs() <= eps
}
