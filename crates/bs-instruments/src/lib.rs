//! # bs-instruments
//!
//! Option instruments and the inputs used to sweep them: the
//! [`VanillaOption`] itself, its [`OptionClass`] tag, the symbolic
//! [`ParameterKind`] and [`Metric`] enums, [`ParameterSet`] value ranges,
//! and put-call parity checks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod metric;
pub mod option;
pub mod parameter;
pub mod parameter_set;
pub mod parity;

pub use exercise::OptionClass;
pub use metric::Metric;
pub use option::VanillaOption;
pub use parameter::ParameterKind;
pub use parameter_set::ParameterSet;
pub use parity::{same_economic_parameters, satisfies_put_call_parity, PARITY_TOLERANCE};
