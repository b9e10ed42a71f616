//! Put-call parity consistency checks.

use crate::option::VanillaOption;
use bs_core::Real;
use bs_math::within;

/// Absolute tolerance used when comparing option inputs and prices: agreement
/// to the nearest tenth of a cent.
pub const PARITY_TOLERANCE: Real = 0.001;

// Equal infinities (perpetual maturities) agree even though their
// difference is NaN.
fn agree(a: Real, b: Real) -> bool {
    a == b || within(a, b, PARITY_TOLERANCE)
}

/// `true` if both options share a class and every numeric input agrees
/// within [`PARITY_TOLERANCE`]. Option type is not compared.
pub fn same_economic_parameters(a: &VanillaOption, b: &VanillaOption) -> bool {
    a.option_class() == b.option_class()
        && agree(a.maturity(), b.maturity())
        && agree(a.strike(), b.strike())
        && agree(a.volatility(), b.volatility())
        && agree(a.spot(), b.spot())
        && agree(a.risk_free_rate(), b.risk_free_rate())
        && agree(a.cost_of_carry(), b.cost_of_carry())
}

/// `true` if `a` and `b` are a call/put pair on the same inputs and `a`'s
/// parity price matches `b`'s price within [`PARITY_TOLERANCE`].
///
/// # Example
/// ```
/// use bs_core::OptionType;
/// use bs_instruments::{satisfies_put_call_parity, VanillaOption};
///
/// let call = VanillaOption::european(OptionType::Call, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08);
/// let put = VanillaOption::european(OptionType::Put, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08);
/// assert!(satisfies_put_call_parity(&call, &put));
/// assert!(!satisfies_put_call_parity(&call, &call));
/// ```
pub fn satisfies_put_call_parity(a: &VanillaOption, b: &VanillaOption) -> bool {
    same_economic_parameters(a, b)
        && a.complement_type() == b.option_type()
        && within(a.parity_price(), b.price(), PARITY_TOLERANCE)
}
