//! # bs-sweep
//!
//! Evaluate an option metric across ranges of inputs.
//!
//! [`OptionManager`] temporarily rewrites an option's parameters, evaluates
//! a [`Metric`](bs_instruments::Metric) at each point, and hands the option
//! back exactly as it found it. The restore is owned by a
//! [`ScopedParameters`] guard, so it also runs if evaluation unwinds.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod option_manager;
pub mod scoped;

pub use option_manager::OptionManager;
pub use scoped::ScopedParameters;
