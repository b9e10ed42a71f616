//! Error types for blackscholes-rs.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report. The `ensure!` macro is shorthand for an early return with
//! [`Error::Precondition`].
//!
//! Numerically degenerate inputs (zero maturity, zero volatility) are *not*
//! errors: the pricing formulas let NaN / ±∞ propagate.

use thiserror::Error;

/// The top-level error type used throughout blackscholes-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A symbolic parameter name did not match any option parameter.
    #[error("invalid option parameter: {0}")]
    InvalidParameterKind(String),

    /// A symbolic metric name did not match any computable metric.
    #[error("invalid option function: {0}")]
    InvalidMetricKind(String),

    /// A symbolic option type was neither call nor put.
    #[error("invalid option type: {0}")]
    InvalidOptionType(String),

    /// Parallel parameter sets passed to a grid sweep differ in length.
    #[error("parameter set {index} has {found} values, expected {expected}")]
    SizeMismatch {
        /// Size of the first parameter set.
        expected: usize,
        /// Size of the offending parameter set.
        found: usize,
        /// Position of the offending set in the grid.
        index: usize,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout blackscholes-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bs_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bs_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_message() {
        let e = Error::SizeMismatch {
            expected: 4,
            found: 2,
            index: 1,
        };
        assert_eq!(e.to_string(), "parameter set 1 has 2 values, expected 4");
    }

    #[test]
    fn invalid_kind_messages() {
        assert_eq!(
            Error::InvalidParameterKind("dividend".into()).to_string(),
            "invalid option parameter: dividend"
        );
        assert_eq!(
            Error::InvalidMetricKind("rho".into()).to_string(),
            "invalid option function: rho"
        );
    }
}
