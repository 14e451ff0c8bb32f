//! Small Euclidean vector helpers operating over fixed-size `[f64; DIMS]`
//! arrays.
//!
//! The original crate this is descended from predates stable const generics
//! and worked around the missing feature with a `Vector` trait implemented
//! once per supported dimensionality (`Dimension2`, `Dimension3`, ...). Const
//! generics let us keep the same non-allocating, fixed-shape representation
//! without the per-dimension boilerplate: `[f64; DIMS]` *is* the vector type,
//! for any `DIMS` the caller picks.

use rand::Rng;

/// Guards against division by zero: the smallest positive normal `f64`.
///
/// Used throughout the update rule (spec term: "ZeroThreshold") wherever a
/// magnitude or sum could legitimately be exactly zero.
pub(crate) const EPSILON: f64 = f64::MIN_POSITIVE;

/// Returns the Euclidean magnitude (L2 norm) of `v`.
///
/// Defined for `DIMS >= 1`; callers are expected to have already rejected
/// `DIMS == 0` at construction time.
pub(crate) fn magnitude<const DIMS: usize>(v: &[f64; DIMS]) -> f64 {
    v.iter().fold(0.0, |acc, x| acc + x * x).sqrt()
}

pub(crate) fn add<const DIMS: usize>(a: &[f64; DIMS], b: &[f64; DIMS]) -> [f64; DIMS] {
    let mut out = [0.0; DIMS];
    for i in 0..DIMS {
        out[i] = a[i] + b[i];
    }
    out
}

pub(crate) fn sub<const DIMS: usize>(a: &[f64; DIMS], b: &[f64; DIMS]) -> [f64; DIMS] {
    let mut out = [0.0; DIMS];
    for i in 0..DIMS {
        out[i] = a[i] - b[i];
    }
    out
}

pub(crate) fn scale<const DIMS: usize>(a: &[f64; DIMS], factor: f64) -> [f64; DIMS] {
    let mut out = [0.0; DIMS];
    for i in 0..DIMS {
        out[i] = a[i] * factor;
    }
    out
}

/// A unit vector, paired with the true (pre-normalization) magnitude of the
/// difference it was derived from.
///
/// `distance` is `0.0` whenever the direction came from the random fallback
/// (steps 2/3 below) rather than from an actual non-zero separation, since in
/// that case the direction is arbitrary and carries no distance information.
pub(crate) struct UnitVector<const DIMS: usize> {
    pub(crate) direction: [f64; DIMS],
    pub(crate) distance: f64,
}

/// Computes a unit vector pointing from `src` towards `dest`, falling back to
/// a random direction when the two points coincide (or nearly so).
///
/// Mirrors the spring analogy from the Vivaldi paper: "two nodes occupying
/// the same location will have a spring pushing them away from each other in
/// some arbitrary direction".
pub(crate) fn unit_vector_towards<const DIMS: usize, R: Rng + ?Sized>(
    dest: &[f64; DIMS],
    src: &[f64; DIMS],
    rng: &mut R,
) -> UnitVector<DIMS> {
    let diff = sub(dest, src);
    let m = magnitude(&diff);
    if m > EPSILON {
        return UnitVector {
            direction: scale(&diff, 1.0 / m),
            distance: m,
        };
    }

    let mut random_dir = [0.0; DIMS];
    for x in random_dir.iter_mut() {
        *x = rng.gen_range(-0.5..0.5);
    }
    let m = magnitude(&random_dir);
    if m > EPSILON {
        return UnitVector {
            direction: scale(&random_dir, 1.0 / m),
            distance: 0.0,
        };
    }

    let mut fallback = [0.0; DIMS];
    fallback[0] = 1.0;
    UnitVector {
        direction: fallback,
        distance: 0.0,
    }
}
