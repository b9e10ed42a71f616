//! Global library settings.
//!
//! [`Settings`] holds the **approximation step** `h` used by the
//! finite-difference Greeks. It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`, and every instrument that is not handed an
//! explicit [`ApproximationConfig`] reads it.
//!
//! Thread safety: the step is stored behind a `Mutex`, so individual reads
//! and writes are safe from any thread. A "set h, then compute" sequence is
//! *not* atomic; callers that need one should hold a
//! [`ScopedApproximationStep`] on a single thread or pass an
//! [`ApproximationConfig`] explicitly.

use crate::Real;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Default finite-difference step.
pub const DEFAULT_APPROXIMATION_STEP: Real = 0.001;

/// Process-wide settings used by blackscholes-rs.
pub struct Settings {
    approximation_step: Mutex<Real>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            approximation_step: Mutex::new(DEFAULT_APPROXIMATION_STEP),
        })
    }

    /// The current finite-difference step shared by all instruments.
    pub fn approximation_step(&self) -> Real {
        *self
            .approximation_step
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Change the finite-difference step for every subsequent approximation.
    ///
    /// The value is not validated; a zero step yields NaN Greeks.
    pub fn set_approximation_step(&self, h: Real) {
        *self
            .approximation_step
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = h;
    }

    /// Restore the default step.
    pub fn reset_approximation_step(&self) {
        self.set_approximation_step(DEFAULT_APPROXIMATION_STEP);
    }
}

/// Sets the global approximation step for the lifetime of the guard and
/// restores the previous value on drop.
///
/// # Example
/// ```
/// use bs_core::{ScopedApproximationStep, Settings};
///
/// let before = Settings::instance().approximation_step();
/// {
///     let _guard = ScopedApproximationStep::new(0.5);
///     assert_eq!(Settings::instance().approximation_step(), 0.5);
/// }
/// assert_eq!(Settings::instance().approximation_step(), before);
/// ```
#[must_use = "the previous step is restored as soon as the guard is dropped"]
pub struct ScopedApproximationStep {
    previous: Real,
}

impl ScopedApproximationStep {
    /// Install `h` as the global step.
    pub fn new(h: Real) -> Self {
        let settings = Settings::instance();
        let previous = settings.approximation_step();
        settings.set_approximation_step(h);
        Self { previous }
    }

    /// The step that will be restored on drop.
    pub fn previous(&self) -> Real {
        self.previous
    }
}

impl Drop for ScopedApproximationStep {
    fn drop(&mut self) {
        Settings::instance().set_approximation_step(self.previous);
    }
}

/// Explicit finite-difference configuration.
///
/// Passing one of these to an approximation routine bypasses the global
/// [`Settings`] entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproximationConfig {
    /// Spot bump `h` used by central differences.
    pub step: Real,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_APPROXIMATION_STEP,
        }
    }
}

impl ApproximationConfig {
    /// Create a configuration with the given step.
    pub fn new(step: Real) -> Self {
        Self { step }
    }

    /// Snapshot the current global step.
    pub fn from_settings() -> Self {
        Self {
            step: Settings::instance().approximation_step(),
        }
    }
}
