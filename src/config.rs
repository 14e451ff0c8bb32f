//! Tuning constants for [`Coordinate`](crate::coordinate::Coordinate).
//!
//! Stable Rust has no const generics over floating point values, so unlike
//! `dims` (a `usize` const generic), the Vivaldi tuning constants are lifted
//! into a plain configuration value the `Coordinate` holds by copy.

/// Tuning constants for the coordinate update rule.
///
/// The defaults reproduce the values used throughout the Vivaldi and Ledlie
/// papers' evaluations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateConfig {
    /// Ceiling on, and initial value of, the error estimate.
    pub max_error: f64,
    /// Floor on, and initial value of, the height component.
    pub min_height: f64,
    /// Learning rate of the error estimate. Must be in `[0, 1)`.
    pub ce: f64,
    /// Learning rate of coordinate motion. Must be in `[0, 1)`.
    pub cc: f64,
    /// Gravitational constant; larger values weaken the pull towards the
    /// origin. Must be positive and finite.
    pub rho: f64,
}

impl Default for CoordinateConfig {
    fn default() -> Self {
        CoordinateConfig {
            max_error: 1.5,
            min_height: 1.0e-5,
            ce: 0.25,
            cc: 0.25,
            rho: 150.0,
        }
    }
}

impl CoordinateConfig {
    /// Panics if any constant violates the bounds documented on the struct's
    /// fields. A programming error, checked unconditionally since this runs
    /// once per `Coordinate` construction, not on the update hot path.
    pub(crate) fn validate(&self) {
        assert!(
            self.max_error > 0.0 && self.max_error.is_finite(),
            "max_error must be a positive finite value"
        );
        assert!(
            self.min_height >= 0.0 && self.min_height.is_finite(),
            "min_height must be a non-negative finite value"
        );
        assert!(
            (0.0..1.0).contains(&self.ce),
            "ce must be in [0, 1), got {}",
            self.ce
        );
        assert!(
            (0.0..1.0).contains(&self.cc),
            "cc must be in [0, 1), got {}",
            self.cc
        );
        assert!(
            self.rho > 0.0 && self.rho.is_finite(),
            "rho must be a positive finite value"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        CoordinateConfig::default().validate();
    }

    #[test]
    #[should_panic(expected = "ce must be in")]
    fn rejects_ce_out_of_range() {
        let mut c = CoordinateConfig::default();
        c.ce = 1.0;
        c.validate();
    }

    #[test]
    #[should_panic(expected = "rho must be")]
    fn rejects_non_positive_rho() {
        let mut c = CoordinateConfig::default();
        c.rho = 0.0;
        c.validate();
    }
}
