//! Vanilla option instrument.
//!
//! A [`VanillaOption`] carries the seven market and contract inputs of one
//! option plus its [`OptionClass`], which is fixed at construction and picks
//! the pricing rule:
//!
//! | Class | Price | Maturity |
//! |-------|-------|----------|
//! | `European` | generalized Black-Scholes | finite, supplied |
//! | `American` | perpetual closed form | `+∞` |
//!
//! Every Greek, closed-form or finite-difference, is the Black-Scholes one
//! regardless of class; for a perpetual option (`T = +∞`) they are NaN. The
//! finite-difference Greeks bump the spot of the Black-Scholes price, using
//! either an explicit [`ApproximationConfig`] or the global step held in
//! [`Settings`](bs_core::Settings).

use crate::exercise::OptionClass;
use crate::metric::Metric;
use crate::parameter::ParameterKind;
use bs_core::errors::Result;
use bs_core::{ApproximationConfig, OptionType, Price, Rate, Real, Time, Volatility};
use bs_formulas::{
    american_perpetual_price, approximate_delta, approximate_gamma, black_scholes_delta,
    black_scholes_gamma, black_scholes_price, black_scholes_theta, black_scholes_vega,
};

/// A call or put on a single underlying.
///
/// Inputs are stored as given and never validated; degenerate values
/// (`σ = 0`, `T = 0`) produce NaN / ±∞ results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption {
    id: u32,
    option_class: OptionClass,
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    carry: Rate,
}

impl Default for VanillaOption {
    /// A European call with every numeric input set to zero.
    fn default() -> Self {
        Self::european(OptionType::Call, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

impl VanillaOption {
    /// A European option.
    ///
    /// Argument order: spot `S`, strike `K`, maturity `T`, risk-free rate
    /// `r`, volatility `σ`, cost of carry `b`.
    pub fn european(
        option_type: OptionType,
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        volatility: Volatility,
        carry: Rate,
    ) -> Self {
        Self {
            id: rand::random(),
            option_class: OptionClass::European,
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            carry,
        }
    }

    /// A perpetual American option; the maturity is fixed at `+∞`.
    pub fn american_perpetual(
        option_type: OptionType,
        spot: Real,
        strike: Real,
        rate: Rate,
        volatility: Volatility,
        carry: Rate,
    ) -> Self {
        Self {
            id: rand::random(),
            option_class: OptionClass::American,
            option_type,
            spot,
            strike,
            maturity: Time::INFINITY,
            rate,
            volatility,
            carry,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Opaque identifier drawn at construction and kept by clones. Not
    /// guaranteed unique.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The exercise class chosen at construction.
    pub fn option_class(&self) -> OptionClass {
        self.option_class
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// The opposite option type.
    pub fn complement_type(&self) -> OptionType {
        self.option_type.complement()
    }

    /// Spot `S`.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Strike `K`.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Time to maturity `T` in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Risk-free rate `r`.
    pub fn risk_free_rate(&self) -> Rate {
        self.rate
    }

    /// Volatility `σ`.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Cost of carry `b`.
    pub fn cost_of_carry(&self) -> Rate {
        self.carry
    }

    /// Read one numeric input.
    pub fn get(&self, kind: ParameterKind) -> Real {
        match kind {
            ParameterKind::Strike => self.strike,
            ParameterKind::Spot => self.spot,
            ParameterKind::Maturity => self.maturity,
            ParameterKind::RiskFreeRate => self.rate,
            ParameterKind::Volatility => self.volatility,
            ParameterKind::CostOfCarry => self.carry,
        }
    }

    /// Overwrite one numeric input.
    ///
    /// Writing the maturity of a perpetual option is allowed; its pricing
    /// rule ignores the field.
    pub fn set(&mut self, kind: ParameterKind, value: Real) {
        let field = match kind {
            ParameterKind::Strike => &mut self.strike,
            ParameterKind::Spot => &mut self.spot,
            ParameterKind::Maturity => &mut self.maturity,
            ParameterKind::RiskFreeRate => &mut self.rate,
            ParameterKind::Volatility => &mut self.volatility,
            ParameterKind::CostOfCarry => &mut self.carry,
        };
        *field = value;
    }

    /// [`get`](Self::get) by symbolic name (see [`ParameterKind`]'s
    /// `FromStr`). Unknown names yield `Error::InvalidParameterKind`.
    pub fn get_named(&self, name: &str) -> Result<Real> {
        Ok(self.get(name.parse()?))
    }

    /// [`set`](Self::set) by symbolic name. Unknown names yield
    /// `Error::InvalidParameterKind` and leave the option untouched.
    pub fn set_named(&mut self, name: &str, value: Real) -> Result<()> {
        self.set(name.parse()?, value);
        Ok(())
    }

    // ── Pricing ──────────────────────────────────────────────────────────

    /// Theoretical price under the option's pricing rule.
    pub fn price(&self) -> Price {
        match self.option_class {
            OptionClass::European => black_scholes_price(
                self.option_type,
                self.spot,
                self.strike,
                self.rate,
                self.carry,
                self.volatility,
                self.maturity,
            ),
            OptionClass::American => american_perpetual_price(
                self.option_type,
                self.spot,
                self.strike,
                self.rate,
                self.carry,
                self.volatility,
            ),
        }
    }

    /// Closed-form delta.
    pub fn delta(&self) -> Real {
        black_scholes_delta(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.carry,
            self.volatility,
            self.maturity,
        )
    }

    /// Closed-form gamma.
    pub fn gamma(&self) -> Real {
        black_scholes_gamma(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.carry,
            self.volatility,
            self.maturity,
        )
    }

    /// Closed-form vega.
    pub fn vega(&self) -> Real {
        black_scholes_vega(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.carry,
            self.volatility,
            self.maturity,
        )
    }

    /// Closed-form theta.
    pub fn theta(&self) -> Real {
        black_scholes_theta(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.carry,
            self.volatility,
            self.maturity,
        )
    }

    /// Central-difference delta using the global step.
    pub fn approximate_delta(&self) -> Real {
        self.approximate_delta_with(&ApproximationConfig::from_settings())
    }

    /// Central-difference gamma using the global step.
    pub fn approximate_gamma(&self) -> Real {
        self.approximate_gamma_with(&ApproximationConfig::from_settings())
    }

    /// Central-difference delta with an explicit step.
    pub fn approximate_delta_with(&self, config: &ApproximationConfig) -> Real {
        approximate_delta(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.carry,
            self.volatility,
            self.maturity,
            config.step,
        )
    }

    /// Central-difference gamma with an explicit step.
    pub fn approximate_gamma_with(&self, config: &ApproximationConfig) -> Real {
        approximate_gamma(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.carry,
            self.volatility,
            self.maturity,
            config.step,
        )
    }

    /// Price of the complementary option implied by put-call parity,
    /// `C + K·e^{−rT} = P + S`.
    pub fn parity_price(&self) -> Price {
        let discounted_strike = self.strike * (-self.rate * self.maturity).exp();
        match self.option_type {
            OptionType::Call => self.price() + discounted_strike - self.spot,
            OptionType::Put => self.price() + self.spot - discounted_strike,
        }
    }

    // ── Metric dispatch ──────────────────────────────────────────────────

    /// Compute `metric`, reading the global step for approximations.
    pub fn calculate(&self, metric: Metric) -> Real {
        self.calculate_with(metric, &ApproximationConfig::from_settings())
    }

    /// Compute `metric` with an explicit approximation configuration.
    pub fn calculate_with(&self, metric: Metric, config: &ApproximationConfig) -> Real {
        match metric {
            Metric::Price => self.price(),
            Metric::Delta => self.delta(),
            Metric::Gamma => self.gamma(),
            Metric::Vega => self.vega(),
            Metric::Theta => self.theta(),
            Metric::ApproxDelta => self.approximate_delta_with(config),
            Metric::ApproxGamma => self.approximate_gamma_with(config),
        }
    }

    /// [`calculate`](Self::calculate) by symbolic name. Unknown names yield
    /// `Error::InvalidMetricKind`.
    pub fn calculate_named(&self, name: &str) -> Result<Real> {
        Ok(self.calculate(name.parse()?))
    }
}
