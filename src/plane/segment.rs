use std::fmt;

use cgmath::{MetricSpace, Point2, Vector2};
use tracing::trace;

use crate::util::scalar::{promote, Coord, Promote, Promoted, Real};
use crate::util::segment::Segment;

/// A directed line segment from `start` to `end`:
///
/// ```
/// # use flatbread::plane::{p2, v2, LineSegment2};
/// # use flatbread::util::segment::Segment;
/// let l = LineSegment2::new(p2(1.0, 1.0), p2(2.0, 3.0));
/// assert_eq!(l.vector(), v2(1.0, 2.0));
/// ```
///
/// A segment whose endpoints coincide is degenerate. Every predicate accepts
/// degenerate segments and treats them as the single point `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment2<S> {
    pub start: Point2<S>,
    pub end: Point2<S>,
}

impl<S: Coord> LineSegment2<S> {
    pub fn new(start: Point2<S>, end: Point2<S>) -> Self {
        LineSegment2 { start, end }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn cast<F: Real>(&self) -> LineSegment2<F> {
        LineSegment2 {
            start: promote(&self.start),
            end: promote(&self.end),
        }
    }

    /// Perpendicular distance from `p` to the infinite line through this
    /// segment. Degenerate segments measure the distance to `start`:
    ///
    /// ```
    /// # use flatbread::plane::{p2, LineSegment2};
    /// let l = LineSegment2::new(p2(0, 0), p2(10, 0));
    /// assert_eq!(l.distance_to(&p2(25.0, -3.0)), 3.0);
    ///
    /// let dot = LineSegment2::new(p2(1, 1), p2(1, 1));
    /// assert_eq!(dot.distance_to(&p2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance_to<T: Coord>(&self, p: &Point2<T>) -> Promoted<S, T>
    where
        S: Promote<T>,
    {
        self.cast::<Promoted<S, T>>().line_distance(promote(p))
    }
}

impl<F: Real> LineSegment2<F> {
    /// The implicit form `a·x + b·y + c = 0` of the line through this
    /// segment.
    pub fn coefficients(&self) -> (F, F, F) {
        let (s, e) = (self.start, self.end);
        let a = e.y - s.y;
        let b = s.x - e.x;
        let c = e.x * s.y - s.x * e.y;
        (a, b, c)
    }

    pub(crate) fn line_distance(&self, p: Point2<F>) -> F {
        let (a, b, c) = self.coefficients();
        if a == F::zero() && b == F::zero() {
            trace!("degenerate segment, measuring from its start point");
            return p.distance(self.start);
        }
        (a * p.x + b * p.y + c).abs() / (a * a + b * b).sqrt()
    }

    /// The point `start + t·vector()`.
    pub(crate) fn at(&self, t: F) -> Point2<F> {
        let v: Vector2<F> = self.vector();
        self.start + v * t
    }
}

impl<S: Copy> Segment for LineSegment2<S> {
    type Point = Point2<S>;

    fn from_endpoints(start: Point2<S>, end: Point2<S>) -> Self {
        LineSegment2 { start, end }
    }

    fn start(&self) -> Point2<S> { self.start }
    fn end(&self) -> Point2<S> { self.end }
}

impl<S: fmt::Display> fmt::Display for LineSegment2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "({}, {}) -> ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
