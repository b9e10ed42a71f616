//! Symbolic names for the quantities an option can compute.

use bs_core::errors::Error;
use std::fmt;
use std::str::FromStr;

/// A value [`VanillaOption::calculate`](crate::VanillaOption::calculate) can
/// produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Theoretical price under the option's pricing rule.
    Price,
    /// Closed-form delta.
    Delta,
    /// Closed-form gamma.
    Gamma,
    /// Closed-form vega.
    Vega,
    /// Closed-form theta.
    Theta,
    /// Central-difference delta.
    ApproxDelta,
    /// Central-difference gamma.
    ApproxGamma,
}

impl Metric {
    /// All metrics, in declaration order.
    pub const ALL: [Metric; 7] = [
        Metric::Price,
        Metric::Delta,
        Metric::Gamma,
        Metric::Vega,
        Metric::Theta,
        Metric::ApproxDelta,
        Metric::ApproxGamma,
    ];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Price => "Price",
            Metric::Delta => "Delta",
            Metric::Gamma => "Gamma",
            Metric::Vega => "Vega",
            Metric::Theta => "Theta",
            Metric::ApproxDelta => "ApproxDelta",
            Metric::ApproxGamma => "ApproxGamma",
        };
        f.write_str(name)
    }
}

impl FromStr for Metric {
    type Err = Error;

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
            "price" | "theoretical_price" | "theoreticalprice" => Ok(Metric::Price),
            "delta" => Ok(Metric::Delta),
            "gamma" => Ok(Metric::Gamma),
            "vega" => Ok(Metric::Vega),
            "theta" => Ok(Metric::Theta),
            "approxdelta" | "approx_delta" | "approximate_delta" => Ok(Metric::ApproxDelta),
            "approxgamma" | "approx_gamma" | "approximate_gamma" => Ok(Metric::ApproxGamma),
            _ => {
                tracing::warn!(metric = s, "invalid option function");
                Err(Error::InvalidMetricKind(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_parse() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn parse_unknown_is_an_error() {
        assert_eq!(
            "rho".parse::<Metric>(),
            Err(Error::InvalidMetricKind("rho".into()))
        );
    }
}
