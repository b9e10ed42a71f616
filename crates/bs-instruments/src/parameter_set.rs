//! Ordered candidate values for one option parameter.

use crate::parameter::ParameterKind;
use bs_core::errors::{Error, Result};
use bs_core::{ensure, Real, Size};

/// An ordered, non-empty list of values for one [`ParameterKind`].
///
/// Immutable once built; `clone` produces an independent copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParameterSet"))]
pub struct ParameterSet {
    kind: ParameterKind,
    values: Vec<Real>,
}

/// Unchecked wire form; deserialization goes through
/// [`ParameterSet::from_values`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParameterSet {
    kind: ParameterKind,
    values: Vec<Real>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = Error;

    fn try_from(raw: RawParameterSet) -> Result<Self> {
        Self::from_values(raw.kind, raw.values)
    }
}

impl Default for ParameterSet {
    /// A single strike of `0.0`.
    fn default() -> Self {
        Self::new(ParameterKind::Strike)
    }
}

impl ParameterSet {
    /// A set of the given kind holding the single value `0.0`.
    pub fn new(kind: ParameterKind) -> Self {
        Self {
            kind,
            values: vec![0.0],
        }
    }

    /// A set holding exactly `values`, in order.
    ///
    /// # Errors
    /// `Error::Precondition` if `values` is empty.
    pub fn from_values(kind: ParameterKind, values: impl Into<Vec<Real>>) -> Result<Self> {
        let values = values.into();
        ensure!(
            !values.is_empty(),
            "{kind} parameter set needs at least one value"
        );
        Ok(Self { kind, values })
    }

    /// `mesh_size + 1` evenly spaced values from `start` to `end` inclusive:
    /// `start + i·(end − start)/mesh_size` for `i = 0..=mesh_size`.
    ///
    /// # Errors
    /// `Error::Precondition` if `mesh_size` is zero.
    ///
    /// # Example
    /// ```
    /// use bs_instruments::{ParameterKind, ParameterSet};
    ///
    /// let spots = ParameterSet::from_range(ParameterKind::Spot, 10.0, 50.0, 40).unwrap();
    /// assert_eq!(spots.size(), 41);
    /// assert_eq!(spots.get(0), 10.0);
    /// assert_eq!(spots.get(40), 50.0);
    /// ```
    pub fn from_range(
        kind: ParameterKind,
        start: Real,
        end: Real,
        mesh_size: Size,
    ) -> Result<Self> {
        ensure!(mesh_size > 0, "mesh size must be positive");
        let h = (end - start) / mesh_size as Real;
        let values = (0..=mesh_size).map(|i| start + h * i as Real).collect();
        Ok(Self { kind, values })
    }

    /// The parameter this set varies.
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// All values, in order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// The value at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.size()`; use [`try_get`](Self::try_get) for
    /// a checked lookup.
    pub fn get(&self, index: Size) -> Real {
        self.values[index]
    }

    /// The value at `index`, or `Error::IndexOutOfRange`.
    pub fn try_get(&self, index: Size) -> Result<Real> {
        self.values
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.values.len(),
            })
    }

    /// Number of values.
    pub fn size(&self) -> Size {
        self.values.len()
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        self.values.iter().copied()
    }
}
