//! Standard normal (Gaussian) distribution.
//!
//! Wraps the `statrs` complementary error function. NaN inputs propagate to
//! NaN outputs; `±∞` map to the limiting values `0` / `1`.

use bs_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The standard normal probability density function `n(x)`.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function `N(x)`.
///
/// `Φ(x) = erfc(-x/√2) / 2`
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}
