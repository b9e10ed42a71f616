//! # bs-core
//!
//! Core types, settings, and error definitions for blackscholes-rs.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace: scalar type aliases, the call/put [`OptionType`], the
//! error hierarchy, and the process-wide [`Settings`] that hold the
//! finite-difference approximation step.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Call / put option type.
pub mod option_type;

/// Global settings (approximation step) and the explicit configuration object.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for container sizes / indices.
pub type Size = usize;

/// A continuously compounded rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use option_type::OptionType;
pub use settings::{
    ApproximationConfig, ScopedApproximationStep, Settings, DEFAULT_APPROXIMATION_STEP,
};
