//! # blackscholes
//!
//! Closed-form option pricing under the generalized Black-Scholes model.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `bs-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! blackscholes = "0.1"
//! ```
//!
//! ```rust
//! use blackscholes::core::OptionType;
//! use blackscholes::instruments::{Metric, ParameterKind, ParameterSet, VanillaOption};
//! use blackscholes::sweep::OptionManager;
//!
//! let mut call = VanillaOption::european(OptionType::Call, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08);
//! assert!((call.price() - 2.13337).abs() < 1e-4);
//!
//! let vols = ParameterSet::from_range(ParameterKind::Volatility, 0.1, 0.5, 4).unwrap();
//! let prices = OptionManager::new().sweep_parameter(&mut call, Metric::Price, &vols);
//! assert_eq!(prices.len(), 5);
//! assert_eq!(call.volatility(), 0.30);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, settings, and error definitions.
pub use bs_core as core;

/// Normal distribution and floating-point comparison.
pub use bs_math as math;

/// Stateless pricing formulas and finite differences.
pub use bs_formulas as formulas;

/// Option instruments, parameter sets, and parity checks.
pub use bs_instruments as instruments;

/// Parameter and grid sweeps.
pub use bs_sweep as sweep;
