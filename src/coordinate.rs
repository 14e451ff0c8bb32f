//! The Vivaldi coordinate update rule: spring relaxation plus a gravitational
//! pull towards the origin (Dabek et al., 2004; Ledlie et al., 2007's
//! adjustment term is applied one layer up, in [`crate::node`]).

use crate::config::CoordinateConfig;
use crate::vector::{self, unit_vector_towards, EPSILON};
use rand::Rng;

/// A point in a height-augmented Euclidean space, with an estimated
/// confidence (`error`) in that point's accuracy.
///
/// `DIMS` is the Euclidean dimensionality, fixed at compile time. All
/// distances, heights and vector components are expressed in seconds.
///
/// ```
/// use vivaldi::coordinate::Coordinate;
///
/// let mut a = Coordinate::<3>::new();
/// let b = Coordinate::<3>::new();
///
/// // An RTT of 50ms was observed between the local node (`a`) and `b`.
/// a.update(&b, 0.050);
///
/// assert!(a.distance(&b) >= 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate<const DIMS: usize> {
    vector: [f64; DIMS],
    height: f64,
    error: f64,
    config: CoordinateConfig,
}

impl<const DIMS: usize> Default for Coordinate<DIMS> {
    fn default() -> Self {
        Self::with_config(CoordinateConfig::default())
    }
}

impl<const DIMS: usize> Coordinate<DIMS> {
    /// Returns a new coordinate at the origin, using the default tuning
    /// constants (see [`CoordinateConfig::default`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new coordinate at the origin, using `config` for the tuning
    /// constants.
    ///
    /// Panics if `DIMS == 0` or `config` holds out-of-range values — these
    /// are programming errors, not recoverable conditions.
    pub fn with_config(config: CoordinateConfig) -> Self {
        assert!(DIMS >= 1, "a coordinate must have at least one dimension");
        config.validate();
        Self::at_origin(config)
    }

    /// Builds an origin coordinate from an already-validated config, skipping
    /// the checks in [`Coordinate::with_config`]. Used internally wherever a
    /// fresh origin is needed on the update hot path (gravity), since `self`
    /// already carries a validated config.
    fn at_origin(config: CoordinateConfig) -> Self {
        Coordinate {
            vector: [0.0; DIMS],
            height: config.min_height,
            error: config.max_error,
            config,
        }
    }

    /// The Euclidean component of the coordinate.
    pub fn vector(&self) -> &[f64; DIMS] {
        &self.vector
    }

    /// Mutable access to the Euclidean component, for tests that need to pin
    /// a coordinate to a known position.
    pub fn vector_mut(&mut self) -> &mut [f64; DIMS] {
        &mut self.vector
    }

    /// The height above the Euclidean plane, modeling access-link latency.
    /// Always `>= config.min_height`.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Mutable access to the height, for tests.
    pub fn height_mut(&mut self) -> &mut f64 {
        &mut self.height
    }

    /// The current estimated position error, always `<= config.max_error`.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Returns the predicted distance (in seconds) between `self` and
    /// `other`: Euclidean separation plus both endpoints' heights.
    pub fn distance(&self, other: &Self) -> f64 {
        vector::magnitude(&vector::sub(&self.vector, &other.vector)) + self.height + other.height
    }

    /// Updates `self` against an observation of `other`, with no hybrid
    /// adjustment (see [`crate::node::Node`] for the adjusted path), using
    /// the thread-local RNG for the coincident-coordinate fallback.
    pub fn update(&mut self, other: &Self, rtt: f64) {
        self.update_with_adjustment(other, rtt, 0.0, 0.0)
    }

    /// Updates `self` against an observation of `other`, folding in the
    /// hybrid (Lee et al.) adjustment terms for both endpoints.
    ///
    /// `rtt` must be finite; passing NaN or infinite RTT is a programming
    /// error.
    pub fn update_with_adjustment(
        &mut self,
        other: &Self,
        rtt: f64,
        local_adj: f64,
        remote_adj: f64,
    ) {
        self.update_with_rng(other, rtt, local_adj, remote_adj, &mut rand::thread_rng())
    }

    /// As [`Coordinate::update_with_adjustment`], but with an explicit RNG
    /// for the random-direction fallback (§4.1.2), so tests can drive the
    /// update deterministically from a seeded source.
    pub fn update_with_rng<R: Rng + ?Sized>(
        &mut self,
        other: &Self,
        rtt: f64,
        local_adj: f64,
        remote_adj: f64,
        rng: &mut R,
    ) {
        debug_assert!(rtt.is_finite(), "rtt passed to update must be finite");

        let d = self.distance(other);
        let d = d.max(d + local_adj + remote_adj);
        let rtt = rtt.max(EPSILON);

        // Relative error of this single sample.
        let relative_error = (d - rtt).abs() / rtt;

        // Confidence weight: how much of the blame for the error belongs to
        // `self` versus `other`. Zero when both sides report zero error, in
        // which case no update happens at all.
        let error_sum = (self.error + other.error).max(EPSILON);
        let weight = self.error / error_sum;

        self.error = (relative_error * self.config.ce * weight
            + self.error * (1.0 - self.config.ce * weight))
            .min(self.config.max_error);

        // Force magnitude: positive (push apart) when the observed RTT
        // exceeds the predicted distance, negative (pull together)
        // otherwise.
        let force = self.config.cc * weight * (rtt - d);
        self.apply_force(other, force, rng);

        // Gravity: a force pulling towards the origin, magnitude quadratic
        // in distance from it, preventing the whole coordinate cloud from
        // drifting. The origin is always the default coordinate, constructed
        // fresh here rather than cached as shared state. `self.config` is
        // already validated, so this skips re-validating on every update.
        let origin = Self::at_origin(self.config);
        let g = self.distance(&origin);
        let g = g.max(g + local_adj);
        let gravity = -((g / self.config.rho).powi(2));
        self.apply_force(&origin, gravity, rng);

        debug_assert!(
            self.vector.iter().all(|x| x.is_finite()),
            "coordinate vector became non-finite"
        );
        debug_assert!(self.height.is_finite(), "coordinate height became non-finite");
        debug_assert!(self.error.is_finite(), "coordinate error became non-finite");
    }

    /// Applies a force of the given magnitude from `other` towards/away-from
    /// `self`, updating both the Euclidean vector and the height.
    fn apply_force<R: Rng + ?Sized>(&mut self, other: &Self, force: f64, rng: &mut R) {
        let u = unit_vector_towards(&self.vector, &other.vector, rng);

        self.vector = vector::add(&self.vector, &vector::scale(&u.direction, force));

        if u.distance > EPSILON {
            self.height = ((self.height + other.height) * force / u.distance + self.height)
                .max(self.config.min_height);
        }
    }
}
