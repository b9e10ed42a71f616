//! Scoped parameter overrides.

use bs_core::Real;
use bs_instruments::{ParameterKind, VanillaOption};
use std::ops::Deref;

/// Exclusive, temporary write access to an option's parameters.
///
/// The first time a kind is touched its current value is saved; dropping the
/// guard writes every saved value back, bit for bit. Reads go through
/// `Deref`; writes must go through [`set`](Self::set) so nothing escapes the
/// snapshot.
///
/// # Example
/// ```
/// use bs_core::OptionType;
/// use bs_instruments::{ParameterKind, VanillaOption};
/// use bs_sweep::ScopedParameters;
///
/// let mut option = VanillaOption::european(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.05);
/// {
///     let mut scoped = ScopedParameters::new(&mut option);
///     scoped.set(ParameterKind::Spot, 120.0);
///     assert_eq!(scoped.spot(), 120.0);
/// }
/// assert_eq!(option.spot(), 100.0);
/// ```
pub struct ScopedParameters<'a> {
    option: &'a mut VanillaOption,
    saved: Vec<(ParameterKind, Real)>,
}

impl<'a> ScopedParameters<'a> {
    /// Take over `option` with nothing saved yet.
    pub fn new(option: &'a mut VanillaOption) -> Self {
        Self {
            option,
            saved: Vec::with_capacity(ParameterKind::ALL.len()),
        }
    }

    /// Take over `option`, saving `kinds` up front.
    pub fn saving(
        option: &'a mut VanillaOption,
        kinds: impl IntoIterator<Item = ParameterKind>,
    ) -> Self {
        let mut scoped = Self::new(option);
        for kind in kinds {
            scoped.save(kind);
        }
        scoped
    }

    fn save(&mut self, kind: ParameterKind) {
        if !self.saved.iter().any(|&(saved, _)| saved == kind) {
            self.saved.push((kind, self.option.get(kind)));
        }
    }

    /// Override one parameter until the guard is dropped.
    pub fn set(&mut self, kind: ParameterKind, value: Real) {
        self.save(kind);
        self.option.set(kind, value);
    }
}

impl Deref for ScopedParameters<'_> {
    type Target = VanillaOption;

    fn deref(&self) -> &VanillaOption {
        self.option
    }
}

impl Drop for ScopedParameters<'_> {
    fn drop(&mut self) {
        for &(kind, value) in &self.saved {
            self.option.set(kind, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bs_core::OptionType;

    fn option() -> VanillaOption {
        VanillaOption::european(OptionType::Put, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08)
    }

    #[test]
    fn repeated_overrides_restore_the_first_value() {
        let mut o = option();
        let before = o.clone();
        {
            let mut scoped = ScopedParameters::new(&mut o);
            scoped.set(ParameterKind::Strike, 10.0);
            scoped.set(ParameterKind::Strike, 20.0);
            scoped.set(ParameterKind::Volatility, 0.5);
            assert_eq!(scoped.strike(), 20.0);
            assert_eq!(scoped.volatility(), 0.5);
        }
        assert_eq!(o, before);
    }

    #[test]
    fn saving_up_front_snapshots_before_any_write() {
        let mut o = option();
        {
            let mut scoped = ScopedParameters::saving(
                &mut o,
                [ParameterKind::Spot, ParameterKind::Spot, ParameterKind::Maturity],
            );
            scoped.set(ParameterKind::Maturity, 5.0);
            scoped.set(ParameterKind::Spot, 1.0);
        }
        assert_eq!(o.maturity(), 0.25);
        assert_eq!(o.spot(), 60.0);
    }

    #[test]
    fn restores_during_unwind() {
        let mut o = option();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut scoped = ScopedParameters::new(&mut o);
            scoped.set(ParameterKind::Spot, 1.0e6);
            panic!("evaluation failed");
        }));
        assert!(result.is_err());
        assert_eq!(o.spot(), 60.0);
    }
}
