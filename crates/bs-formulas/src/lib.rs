//! # bs-formulas
//!
//! Stateless pricing formulas over scalar inputs.
//!
//! - [`black_scholes_price`] and the closed-form Greeks: generalized
//!   Black-Scholes with cost of carry `b`
//! - [`approximate_delta`] / [`approximate_gamma`]: central finite
//!   differences on the Black-Scholes price
//! - [`american_perpetual_price`]: closed form for perpetual American options
//!
//! Every function takes its inputs in the same order:
//! `(option_type, spot, strike, rate, carry, volatility, maturity)`, with the
//! perpetual formula omitting `maturity`. Inputs are not validated.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod american_perpetual;
pub mod black_scholes;
pub mod finite_difference;

pub use american_perpetual::american_perpetual_price;
pub use black_scholes::{
    black_scholes_delta, black_scholes_gamma, black_scholes_price, black_scholes_theta,
    black_scholes_vega, d1, d2,
};
pub use finite_difference::{approximate_delta, approximate_gamma};
