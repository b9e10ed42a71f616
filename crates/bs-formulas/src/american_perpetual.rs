//! Perpetual American options.
//!
//! With no expiry the pricing PDE loses its time derivative and the value
//! solves an ODE in the spot. The characteristic roots are
//!
//! $$y_{1,2} = \tfrac12 - \frac{b}{\sigma^2} \pm
//!   \sqrt{\left(\frac{b}{\sigma^2} - \tfrac12\right)^2 + \frac{2r}{\sigma^2}}$$
//!
//! and the prices are
//!
//! $$C = \frac{K}{y_1 - 1}\left(\frac{y_1 - 1}{y_1}\frac{S}{K}\right)^{y_1}
//! \qquad
//! P = \frac{K}{1 - y_2}\left(\frac{y_2 - 1}{y_2}\frac{S}{K}\right)^{y_2}$$
//!
//! The formulas assume the spot has not yet crossed the optimal exercise
//! boundary; past it the expression is not the exercise value and is
//! returned unchanged.

use bs_core::{OptionType, Price, Rate, Real, Volatility};

/// Closed-form price of a perpetual American call or put.
///
/// # Example
/// ```
/// use bs_core::OptionType;
/// use bs_formulas::american_perpetual_price;
///
/// let call = american_perpetual_price(OptionType::Call, 110.0, 100.0, 0.1, 0.02, 0.1);
/// assert!((call - 18.5035).abs() < 1e-3);
/// ```
pub fn american_perpetual_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
) -> Price {
    let variance = volatility * volatility;
    let beta = carry / variance;
    let root = ((beta - 0.5).powi(2) + 2.0 * rate / variance).sqrt();

    match option_type {
        OptionType::Call => {
            let y1 = 0.5 - beta + root;
            (strike / (y1 - 1.0)) * (((y1 - 1.0) / y1) * spot / strike).powf(y1)
        }
        OptionType::Put => {
            let y2 = 0.5 - beta - root;
            (strike / (1.0 - y2)) * (((y2 - 1.0) / y2) * spot / strike).powf(y2)
        }
    }
}
