//! The single tolerance every fuzzy comparison in the crate goes through.
//!
//! Changing [`EPSILON`] reclassifies near-tangent and near-coincident
//! configurations consistently across all predicates.
use crate::util::scalar::Real;

/// Two scalars closer than this are equal.
#[cfg(not(feature = "coarse-tolerance"))]
pub const EPSILON: f64 = 1e-6;

/// Two scalars closer than this are equal.
#[cfg(feature = "coarse-tolerance")]
pub const EPSILON: f64 = 0.1;

pub fn epsilon<F: Real>() -> F {
    F::of(EPSILON)
}

/// `|a - b| <= EPSILON`:
///
/// ```
/// # use flatbread::util::tolerance::{equal, EPSILON};
/// assert!(equal(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!equal(1.0, 1.0 + EPSILON * 2.0));
/// ```
pub fn equal<F: Real>(a: F, b: F) -> bool {
    (a - b).abs() <= epsilon()
}

pub fn is_zero<F: Real>(a: F) -> bool {
    equal(a, F::zero())
}
