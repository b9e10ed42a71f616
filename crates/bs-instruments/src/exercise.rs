//! Option exercise class.
//!
//! The class is fixed when an option is built and decides which pricing
//! rule the option dispatches to.

use std::fmt;

/// Exercise class of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionClass {
    /// Exercisable only at a finite expiry; priced with Black-Scholes.
    #[default]
    European,
    /// Exercisable at any time with no expiry; priced with the perpetual
    /// closed form.
    American,
}

impl fmt::Display for OptionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionClass::European => write!(f, "European"),
            OptionClass::American => write!(f, "American"),
        }
    }
}
