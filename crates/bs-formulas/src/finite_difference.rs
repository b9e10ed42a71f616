//! Finite-difference spot Greeks on the Black-Scholes price.

use crate::black_scholes::black_scholes_price;
use bs_core::{OptionType, Rate, Real, Time, Volatility};

/// Central first difference `(f(x+h) − f(x−h)) / 2h`.
#[inline]
fn central_first_difference<F>(f: F, x: Real, h: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Central second difference `(f(x+h) − 2f(x) + f(x−h)) / h²`.
#[inline]
fn central_second_difference<F>(f: F, x: Real, h: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)
}

/// Delta approximated by bumping the spot of the Black-Scholes price by `±h`.
#[allow(clippy::too_many_arguments)]
pub fn approximate_delta(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
    h: Real,
) -> Real {
    central_first_difference(
        |s| black_scholes_price(option_type, s, strike, rate, carry, volatility, maturity),
        spot,
        h,
    )
}

/// Gamma approximated by a second central difference of the Black-Scholes
/// price with spot step `h`.
#[allow(clippy::too_many_arguments)]
pub fn approximate_gamma(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    maturity: Time,
    h: Real,
) -> Real {
    central_second_difference(
        |s| black_scholes_price(option_type, s, strike, rate, carry, volatility, maturity),
        spot,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::black_scholes::{black_scholes_delta, black_scholes_gamma};
    use approx::assert_abs_diff_eq;

    #[test]
    fn differences_of_a_quadratic_are_exact() {
        let f = |x: Real| 3.0 * x * x + 2.0 * x + 1.0;
        assert_abs_diff_eq!(central_first_difference(f, 2.0, 0.5), 14.0, epsilon = 1e-12);
        assert_abs_diff_eq!(central_second_difference(f, 2.0, 0.5), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn approximations_match_closed_form() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let args = (option_type, 105.0, 100.0, 0.1, 0.0, 0.36, 0.5);
            let delta = black_scholes_delta(args.0, args.1, args.2, args.3, args.4, args.5, args.6);
            let gamma = black_scholes_gamma(args.0, args.1, args.2, args.3, args.4, args.5, args.6);
            let approx_delta =
                approximate_delta(args.0, args.1, args.2, args.3, args.4, args.5, args.6, 0.01);
            let approx_gamma =
                approximate_gamma(args.0, args.1, args.2, args.3, args.4, args.5, args.6, 0.01);
            assert_abs_diff_eq!(approx_delta, delta, epsilon = 1e-6);
            assert_abs_diff_eq!(approx_gamma, gamma, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_step_is_not_guarded() {
        let d = approximate_delta(OptionType::Call, 105.0, 100.0, 0.1, 0.0, 0.36, 0.5, 0.0);
        assert!(d.is_nan());
    }
}
