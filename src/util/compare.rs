//! Component-wise comparisons on points.
//!
//! These are conjunctions over both axes, not a lexicographic order, so
//! `a` and `b` can be neither `all_le` nor `all_ge` each other.
use cgmath::{Point2, Vector2};

use crate::util::scalar::Real;
use crate::util::tolerance::equal;

/// `a.x <= b.x && a.y <= b.y`
pub fn all_le<S: PartialOrd>(a: &Point2<S>, b: &Point2<S>) -> bool {
    a.x <= b.x && a.y <= b.y
}

/// `a.x >= b.x && a.y >= b.y`
pub fn all_ge<S: PartialOrd>(a: &Point2<S>, b: &Point2<S>) -> bool {
    a.x >= b.x && a.y >= b.y
}

/// Both coordinates equal within [`EPSILON`](crate::util::tolerance::EPSILON),
/// independently on each axis.
pub fn points_equal<F: Real>(a: &Point2<F>, b: &Point2<F>) -> bool {
    equal(a.x, b.x) && equal(a.y, b.y)
}

/// `v` rotated a quarter turn: `(-y, x)`.
pub fn perp<F: Real>(v: Vector2<F>) -> Vector2<F> {
    Vector2::new(-v.y, v.x)
}
