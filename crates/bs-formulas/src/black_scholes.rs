//! Generalized Black-Scholes price and closed-form Greeks.
//!
//! With cost of carry `b`:
//!
//! $$C = S e^{(b-r)T} N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S e^{(b-r)T} N(-d_1)$$
//!
//! where $d_1 = \frac{\ln(S/K) + (b + \sigma^2/2)T}{\sigma\sqrt{T}}$ and
//! $d_2 = d_1 - \sigma\sqrt{T}$.
//!
//! `b = r` gives the Black-Scholes stock option model, `b = r - q` the Merton
//! model with continuous dividend yield `q`, `b = 0` the Black futures model.
//!
//! No input guards: `T = 0` or `σ = 0` divide by zero inside `d1` and the
//! resulting NaN / ±∞ flow through the normal CDF unchanged.

use bs_core::{OptionType, Price, Rate, Real, Time, Volatility};
use bs_math::distributions::{normal_cdf, normal_pdf};

/// The `d1` term.
#[inline]
pub fn d1(spot: Real, strike: Real, carry: Rate, volatility: Volatility, maturity: Time) -> Real {
    ((spot / strike).ln() + (carry + 0.5 * volatility * volatility) * maturity)
        / (volatility * maturity.sqrt())
}

/// The `d2` term, from an already computed `d1`.
#[inline]
pub fn d2(d1: Real, volatility: Volatility, maturity: Time) -> Real {
    d1 - volatility * maturity.sqrt()
}

/// Black-Scholes theoretical price.
///
/// # Example
/// ```
/// use bs_core::OptionType;
/// use bs_formulas::black_scholes_price;
///
/// // S = 60, K = 65, r = b = 8 %, σ = 30 %, T = 0.25
/// let call = black_scholes_price(OptionType::Call, 60.0, 65.0, 0.08, 0.08, 0.30, 0.25);
/// assert!((call - 2.13337).abs() < 1e-4);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Price {
    let d1 = d1(spot, strike, carry, volatility, maturity);
    let d2 = d2(d1, volatility, maturity);
    let carry_df = ((carry - rate) * maturity).exp();
    let df = (-rate * maturity).exp();

    match option_type {
        OptionType::Call => spot * carry_df * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionType::Put => strike * df * normal_cdf(-d2) - spot * carry_df * normal_cdf(-d1),
    }
}

/// Delta: `∂V/∂S`.
pub fn black_scholes_delta(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Real {
    let d1 = d1(spot, strike, carry, volatility, maturity);
    let carry_df = ((carry - rate) * maturity).exp();

    match option_type {
        OptionType::Call => carry_df * normal_cdf(d1),
        OptionType::Put => carry_df * (normal_cdf(d1) - 1.0),
    }
}

/// Gamma: `∂²V/∂S²`. Identical for calls and puts.
pub fn black_scholes_gamma(
    _option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Real {
    let d1 = d1(spot, strike, carry, volatility, maturity);
    ((carry - rate) * maturity).exp() * normal_pdf(d1) / (spot * volatility * maturity.sqrt())
}

/// Vega: `∂V/∂σ` (per 1.0 absolute vol, not per 1 %). Identical for calls
/// and puts.
pub fn black_scholes_vega(
    _option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Real {
    let d1 = d1(spot, strike, carry, volatility, maturity);
    spot * maturity.sqrt() * ((carry - rate) * maturity).exp() * normal_pdf(d1)
}

/// Theta: `∂V/∂t` per year of calendar time (negative of `∂V/∂T`).
pub fn black_scholes_theta(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Real {
    let d1 = d1(spot, strike, carry, volatility, maturity);
    let d2 = d2(d1, volatility, maturity);
    let carry_df = ((carry - rate) * maturity).exp();

    let decay = spot * volatility * carry_df * normal_pdf(d1) / (2.0 * maturity.sqrt());
    let carry_term = (carry - rate) * spot * carry_df;
    let rate_term = rate * strike * (-rate * maturity).exp();

    match option_type {
        OptionType::Call => -decay - carry_term * normal_cdf(d1) - rate_term * normal_cdf(d2),
        OptionType::Put => carry_term * normal_cdf(-d1) + rate_term * normal_cdf(-d2) - decay,
    }
}
