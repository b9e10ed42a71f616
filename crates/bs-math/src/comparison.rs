//! Comparison utilities.

use bs_core::Real;

/// Return `true` if `|a - b| < tolerance` (strict).
///
/// NaN on either side compares as not within tolerance.
#[inline]
pub fn within(a: Real, b: Real, tolerance: Real) -> bool {
    (a - b).abs() < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_is_strict() {
        assert!(within(100.0, 100.0005, 0.001));
        assert!(!within(0.0, 0.5, 0.5));
        assert!(!within(Real::NAN, 1.0, 0.001));
    }
}
