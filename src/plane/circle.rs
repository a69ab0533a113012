use std::f64::consts::PI;
use std::fmt;

use cgmath::Point2;

use crate::error::GeometryError;
use crate::plane::{p2, v2, Rect2};
use crate::util::scalar::{promote, Coord, Real};

/// A circle centered on `pos`.
///
/// ```
/// # use flatbread::plane::{p2, Circle2};
/// let c = Circle2::new(p2(0.0, 0.0), 2.0);
/// assert_eq!(c.area(), std::f64::consts::PI * 4.0);
/// assert_eq!(c.circumference(), std::f64::consts::PI * 4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2<S> {
    pub pos: Point2<S>,
    pub radius: S,
}

impl<S: Coord> Circle2<S> {
    pub fn new(pos: Point2<S>, radius: S) -> Self {
        Circle2 { pos, radius }
    }

    pub fn try_new(pos: Point2<S>, radius: S) -> Result<Self, GeometryError> {
        let circle = Circle2 { pos, radius };
        match circle.validate() {
            Some(err) => Err(err),
            None => Ok(circle),
        }
    }

    pub fn validate(&self) -> Option<GeometryError> {
        if self.radius < S::zero() {
            Some(GeometryError::NegativeRadius)
        } else {
            None
        }
    }

    pub fn cast<F: Real>(&self) -> Circle2<F> {
        Circle2 {
            pos: promote(&self.pos),
            radius: F::of(self.radius),
        }
    }

    pub fn area(&self) -> f64 {
        let r = f64::of(self.radius);
        PI * r * r
    }

    pub fn circumference(&self) -> f64 {
        let r = f64::of(self.radius);
        2.0 * PI * r
    }

    /// The smallest axis-aligned square holding this circle.
    pub fn bounds(&self) -> Rect2<S> {
        let r = self.radius;
        Rect2::new(
            p2(self.pos.x - r, self.pos.y - r),
            v2(r + r, r + r)
        )
    }
}

impl<S: fmt::Display> fmt::Display for Circle2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "circle ({}, {}) radius {}", self.pos.x, self.pos.y, self.radius)
    }
}
