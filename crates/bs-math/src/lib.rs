//! # bs-math
//!
//! Mathematical utilities: the standard normal distribution (via statrs)
//! and tolerance-based floating-point comparison.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::within;
pub use distributions::{normal_cdf, normal_pdf};
