//! Symbolic names for the six numeric option parameters.

use bs_core::errors::Error;
use std::fmt;
use std::str::FromStr;

/// One of the numeric inputs of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterKind {
    /// Strike price `K`.
    Strike,
    /// Current price of the underlying `S`.
    Spot,
    /// Time to maturity `T` in years.
    Maturity,
    /// Risk-free rate `r`.
    RiskFreeRate,
    /// Volatility `σ`.
    Volatility,
    /// Cost of carry `b`.
    CostOfCarry,
}

impl ParameterKind {
    /// All kinds, in declaration order.
    pub const ALL: [ParameterKind; 6] = [
        ParameterKind::Strike,
        ParameterKind::Spot,
        ParameterKind::Maturity,
        ParameterKind::RiskFreeRate,
        ParameterKind::Volatility,
        ParameterKind::CostOfCarry,
    ];
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterKind::Strike => "Strike",
            ParameterKind::Spot => "Spot",
            ParameterKind::Maturity => "Maturity",
            ParameterKind::RiskFreeRate => "RiskFreeRate",
            ParameterKind::Volatility => "Volatility",
            ParameterKind::CostOfCarry => "CostOfCarry",
        };
        f.write_str(name)
    }
}

impl FromStr for ParameterKind {
    type Err = Error;

    /// Case-insensitive; `-` and spaces are treated as `_`. Accepts the
    /// display names, snake_case names, and the usual single-letter symbols
    /// (`K`, `S`, `T`, `r`, `sigma`, `b`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "strike" | "strike_price" | "k" => Ok(ParameterKind::Strike),
            "spot" | "asset_price" | "underlying" | "s" => Ok(ParameterKind::Spot),
            "maturity" | "time_to_maturity" | "expiry" | "t" => Ok(ParameterKind::Maturity),
            "riskfreerate" | "risk_free_rate" | "rate" | "r" => Ok(ParameterKind::RiskFreeRate),
            "volatility" | "vol" | "sigma" => Ok(ParameterKind::Volatility),
            "costofcarry" | "cost_of_carry" | "carry" | "b" => Ok(ParameterKind::CostOfCarry),
            _ => {
                tracing::warn!(parameter = s, "invalid option parameter");
                Err(Error::InvalidParameterKind(s.to_string()))
            }
        }
    }
}
