//! Containment between every ordered pair of shapes where it is meaningful.
//!
//! Each impl promotes both operands to their common [`Real`] type and defers
//! to a float-only routine below. Those routines are shared with the
//! intersection engine.
use cgmath::{InnerSpace, MetricSpace, Point2, Vector2};
use tracing::trace;

use crate::plane::{Circle2, LineSegment2, Rect2};
use crate::util::compare::{all_ge, all_le, points_equal};
use crate::util::container::Container;
use crate::util::scalar::{promote, Coord, Promote, Promoted, Real};
use crate::util::segment::Segment;
use crate::util::tolerance::{equal, is_zero};

pub(crate) fn rect_point<F: Real>(r: &Rect2<F>, p: &Point2<F>) -> bool {
    all_ge(p, &r.top_left()) && all_le(p, &r.bottom_right())
}

pub(crate) fn rect_rect<F: Real>(outer: &Rect2<F>, inner: &Rect2<F>) -> bool {
    all_ge(&inner.top_left(), &outer.top_left())
        && all_le(&inner.bottom_right(), &outer.bottom_right())
}

/// Projects `p` onto `l`. The projection parameter must fall within the
/// segment and `p` must lie within tolerance of its projection.
pub(crate) fn segment_point<F: Real>(l: &LineSegment2<F>, p: &Point2<F>) -> bool {
    let v: Vector2<F> = l.vector();
    let len2 = v.magnitude2();
    if len2 == F::zero() {
        trace!("degenerate segment, comparing against its start point");
        return points_equal(&l.start, p);
    }

    let t = v.dot(*p - l.start) / len2;
    if t < F::zero() || t > F::one() {
        return false;
    }

    is_zero(p.distance(l.at(t)))
}

pub(crate) fn circle_point<F: Real>(c: &Circle2<F>, p: &Point2<F>) -> bool {
    let d2 = c.pos.distance2(*p);
    let r2 = c.radius * c.radius;
    d2 < r2 || equal(d2, r2)
}

impl<S, T> Container<Point2<T>> for Point2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, p: &Point2<T>) -> bool {
        let a: Point2<Promoted<S, T>> = promote(self);
        points_equal(&a, &promote(p))
    }
}

/// Inclusive on every edge:
///
/// ```
/// # use flatbread::plane::{p2, v2, Rect2};
/// # use flatbread::util::container::Container;
/// let r = Rect2::new(p2(0, 0), v2(10, 10));
/// assert!(r.contains(&p2(5, 5)));
/// assert!(r.contains(&p2(10, 0)));
/// assert!(!r.contains(&p2(11, 0)));
/// ```
impl<S, T> Container<Point2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, p: &Point2<T>) -> bool {
        rect_point(&self.cast::<Promoted<S, T>>(), &promote(p))
    }
}

impl<S, T> Container<Rect2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, r: &Rect2<T>) -> bool {
        rect_rect(&self.cast::<Promoted<S, T>>(), &r.cast())
    }
}

impl<S, T> Container<LineSegment2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, l: &LineSegment2<T>) -> bool {
        let r = self.cast::<Promoted<S, T>>();
        let l = l.cast();
        rect_point(&r, &l.start) && rect_point(&r, &l.end)
    }
}

/// Approximates the disk by its bounding square and tests that instead.
/// This is a bounding-box check, not an exact disk-in-rectangle test.
impl<S, T> Container<Circle2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, c: &Circle2<T>) -> bool {
        let c = c.cast::<Promoted<S, T>>();
        rect_rect(&self.cast(), &c.bounds())
    }
}

/// Segments only contain segments they coincide with, in either direction.
/// A shorter collinear segment lying inside this one is not contained.
impl<S, T> Container<LineSegment2<T>> for LineSegment2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, other: &LineSegment2<T>) -> bool {
        let a = self.cast::<Promoted<S, T>>();
        let b = other.cast();
        (points_equal(&a.start, &b.start) && points_equal(&a.end, &b.end))
            || (points_equal(&a.start, &b.end) && points_equal(&a.end, &b.start))
    }
}

impl<S, T> Container<Point2<T>> for LineSegment2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, p: &Point2<T>) -> bool {
        segment_point(&self.cast::<Promoted<S, T>>(), &promote(p))
    }
}

impl<S, T> Container<Point2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, p: &Point2<T>) -> bool {
        circle_point(&self.cast::<Promoted<S, T>>(), &promote(p))
    }
}

impl<S, T> Container<Circle2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, other: &Circle2<T>) -> bool {
        let a = self.cast::<Promoted<S, T>>();
        let b = other.cast();
        a.radius >= a.pos.distance(b.pos) + b.radius
    }
}

impl<S, T> Container<LineSegment2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, l: &LineSegment2<T>) -> bool {
        let c = self.cast::<Promoted<S, T>>();
        let l = l.cast();
        circle_point(&c, &l.start) && circle_point(&c, &l.end)
    }
}

/// Both shapes are convex, so the corners decide.
impl<S, T> Container<Rect2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    fn contains(&self, r: &Rect2<T>) -> bool {
        let c = self.cast::<Promoted<S, T>>();
        r.cast().corners().iter().all(|corner| circle_point(&c, corner))
    }
}
