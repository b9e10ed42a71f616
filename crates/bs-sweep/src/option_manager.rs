//! Single-parameter and grid sweeps.
//!
//! A sweep takes exclusive, temporary control of an option: it writes each
//! candidate value, evaluates one [`Metric`], and restores the original
//! inputs before returning. The restore is owned by a [`ScopedParameters`]
//! guard, so no early return or unwind can leave the option modified.

use crate::scoped::ScopedParameters;
use bs_core::errors::{Error, Result};
use bs_core::{ApproximationConfig, Real};
use bs_instruments::{Metric, ParameterSet, VanillaOption};
use tracing::{debug, trace, warn};

/// Evaluates option metrics across parameter sets.
///
/// With no configuration, approximate Greeks read the global step from
/// [`Settings`](bs_core::Settings) at each evaluation. A manager built with
/// [`with_config`](Self::with_config) uses its own step and ignores the
/// global.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OptionManager {
    config: Option<ApproximationConfig>,
}

impl OptionManager {
    /// A manager that follows the global approximation step.
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager with a fixed approximation step.
    pub fn with_config(config: ApproximationConfig) -> Self {
        Self { config: Some(config) }
    }

    /// The fixed configuration, if any.
    pub fn config(&self) -> Option<&ApproximationConfig> {
        self.config.as_ref()
    }

    fn evaluate(&self, option: &VanillaOption, metric: Metric) -> Real {
        match &self.config {
            Some(config) => option.calculate_with(metric, config),
            None => option.calculate(metric),
        }
    }

    /// Evaluate `metric` once per value of `set`, in order.
    ///
    /// The option's `set.kind()` input is overwritten for each point and put
    /// back afterwards, bit for bit.
    ///
    /// # Example
    /// ```
    /// use bs_core::OptionType;
    /// use bs_instruments::{Metric, ParameterKind, ParameterSet, VanillaOption};
    /// use bs_sweep::OptionManager;
    ///
    /// let mut call =
    ///     VanillaOption::european(OptionType::Call, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08);
    /// let spots = ParameterSet::from_range(ParameterKind::Spot, 10.0, 50.0, 40).unwrap();
    ///
    /// let prices = OptionManager::new().sweep_parameter(&mut call, Metric::Price, &spots);
    /// assert_eq!(prices.len(), 41);
    /// assert_eq!(call.spot(), 60.0);
    /// ```
    pub fn sweep_parameter(
        &self,
        option: &mut VanillaOption,
        metric: Metric,
        set: &ParameterSet,
    ) -> Vec<Real> {
        let kind = set.kind();
        debug!(option = option.id(), %metric, %kind, points = set.size(), "parameter sweep");

        let mut scoped = ScopedParameters::saving(option, [kind]);
        let results: Vec<Real> = set
            .iter()
            .map(|value| {
                scoped.set(kind, value);
                let result = self.evaluate(&scoped, metric);
                trace!(%kind, value, result);
                result
            })
            .collect();

        debug!(points = results.len(), "parameter sweep finished");
        results
    }

    /// Evaluate `metric` along parallel parameter sets.
    ///
    /// At step `i` the `i`-th value of every set is written before a single
    /// evaluation. When two sets share a kind the later set wins. Every
    /// touched input is restored once the sweep ends.
    ///
    /// All sets must have the same length. A mismatch is rejected with
    /// [`Error::SizeMismatch`] before the option is touched. An empty slice
    /// yields an empty result.
    pub fn sweep_grid(
        &self,
        option: &mut VanillaOption,
        metric: Metric,
        sets: &[ParameterSet],
    ) -> Result<Vec<Real>> {
        let Some(first) = sets.first() else {
            return Ok(Vec::new());
        };
        let points = first.size();
        if let Some((index, set)) = sets
            .iter()
            .enumerate()
            .find(|(_, set)| set.size() != points)
        {
            warn!(expected = points, found = set.size(), index, "grid sweep size mismatch");
            return Err(Error::SizeMismatch {
                expected: points,
                found: set.size(),
                index,
            });
        }
        debug!(option = option.id(), %metric, dimensions = sets.len(), points, "grid sweep");

        let mut scoped = ScopedParameters::saving(option, sets.iter().map(ParameterSet::kind));
        let results: Vec<Real> = (0..points)
            .map(|i| {
                for set in sets {
                    scoped.set(set.kind(), set.get(i));
                }
                let result = self.evaluate(&scoped, metric);
                trace!(point = i, result);
                result
            })
            .collect();

        debug!(points = results.len(), "grid sweep finished");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bs_core::OptionType;
    use bs_instruments::ParameterKind;

    fn call() -> VanillaOption {
        VanillaOption::european(OptionType::Call, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08)
    }

    #[test]
    fn single_sweep_matches_pointwise_prices() {
        let mut o = call();
        let before = o.clone();
        let strikes =
            ParameterSet::from_values(ParameterKind::Strike, vec![60.0, 65.0, 70.0]).unwrap();

        let prices = OptionManager::new().sweep_parameter(&mut o, Metric::Price, &strikes);

        assert_eq!(prices.len(), 3);
        for (price, strike) in prices.iter().zip(strikes.iter()) {
            let mut expected = before.clone();
            expected.set(ParameterKind::Strike, strike);
            assert_eq!(*price, expected.price());
        }
        assert_abs_diff_eq!(prices[1], 2.13337, epsilon = 1e-4);
        assert_eq!(o, before);
    }

    #[test]
    fn grid_overlapping_kinds_last_set_wins() {
        let mut o = call();
        let before = o.clone();
        let sets = [
            ParameterSet::from_values(ParameterKind::Spot, vec![10.0, 20.0]).unwrap(),
            ParameterSet::from_values(ParameterKind::Spot, vec![55.0, 70.0]).unwrap(),
        ];

        let prices = OptionManager::new().sweep_grid(&mut o, Metric::Price, &sets).unwrap();

        let mut at_55 = before.clone();
        at_55.set(ParameterKind::Spot, 55.0);
        let mut at_70 = before.clone();
        at_70.set(ParameterKind::Spot, 70.0);
        assert_eq!(prices, vec![at_55.price(), at_70.price()]);
        assert_eq!(o, before);
    }

    #[test]
    fn grid_size_mismatch_is_rejected_untouched() {
        let mut o = call();
        let before = o.clone();
        let sets = [
            ParameterSet::from_values(ParameterKind::Spot, vec![10.0, 20.0, 30.0]).unwrap(),
            ParameterSet::from_values(ParameterKind::Volatility, vec![0.1, 0.2]).unwrap(),
        ];

        let err = OptionManager::new().sweep_grid(&mut o, Metric::Price, &sets).unwrap_err();

        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 3,
                found: 2,
                index: 1,
            }
        );
        assert_eq!(o, before);
    }

    #[test]
    fn empty_grid_is_empty() {
        let mut o = call();
        let prices = OptionManager::new().sweep_grid(&mut o, Metric::Price, &[]).unwrap();
        assert!(prices.is_empty());
    }

    #[test]
    fn fixed_config_drives_approximations() {
        let mut o = call();
        let spots = ParameterSet::from_values(ParameterKind::Spot, vec![55.0, 65.0]).unwrap();
        let config = ApproximationConfig::new(1.0);
        let manager = OptionManager::with_config(config);
        assert_eq!(manager.config(), Some(&config));

        let deltas = manager.sweep_parameter(&mut o, Metric::ApproxDelta, &spots);

        for (delta, spot) in deltas.iter().zip(spots.iter()) {
            let mut expected = call();
            expected.set(ParameterKind::Spot, spot);
            assert_eq!(*delta, expected.approximate_delta_with(&config));
        }
    }
}
