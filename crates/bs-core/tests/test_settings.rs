//! Global approximation-step behaviour.
//!
//! Kept in its own test binary, and in a single test function, because the
//! step is process-wide state.

use bs_core::{ApproximationConfig, ScopedApproximationStep, Settings, DEFAULT_APPROXIMATION_STEP};

#[test]
fn approximation_step_lifecycle() {
    let settings = Settings::instance();
    assert_eq!(settings.approximation_step(), DEFAULT_APPROXIMATION_STEP);

    settings.set_approximation_step(0.01);
    assert_eq!(settings.approximation_step(), 0.01);
    assert_eq!(ApproximationConfig::from_settings().step, 0.01);

    {
        let guard = ScopedApproximationStep::new(1.0);
        assert_eq!(guard.previous(), 0.01);
        assert_eq!(settings.approximation_step(), 1.0);

        {
            let _inner = ScopedApproximationStep::new(10.0);
            assert_eq!(settings.approximation_step(), 10.0);
        }
        assert_eq!(settings.approximation_step(), 1.0);
    }
    assert_eq!(settings.approximation_step(), 0.01);

    settings.reset_approximation_step();
    assert_eq!(settings.approximation_step(), DEFAULT_APPROXIMATION_STEP);
}
