//! Boundary intersections between every pair of shapes.
//!
//! Each unordered pair of shape types has one canonical implementation. The
//! mirrored pair swaps its arguments and calls it, so `a.intersects(&b)` and
//! `b.intersects(&a)` always agree.
use std::slice;
use std::vec;

use cgmath::{InnerSpace, MetricSpace, Point2, Vector2};
use tracing::{trace, warn};

use crate::error::GeometryError;
use crate::plane::contains;
use crate::plane::{p2, Circle2, LineSegment2, Rect2, Side};
use crate::util::compare::{perp, points_equal};
use crate::util::intersect::Intersect;
use crate::util::scalar::{promote, Coord, Promote, Promoted, Real};
use crate::util::segment::Segment;
use crate::util::tolerance::{epsilon, equal, is_zero};

/// The points where two shapes' boundaries cross or touch, in the order the
/// boundaries were scanned. Empty when the shapes do not intersect.
///
/// When one of the shapes is a [`Rect2`], `sides` records which of its sides
/// were hit:
///
/// - rectangle and point: the first side containing the point.
/// - rectangle and segment, rectangle and circle: one side per point,
///   parallel to `points`.
/// - rectangle and rectangle: each side of the first rectangle that hit the
///   second at least once.
///
/// Otherwise `sides` is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<F> {
    pub points: Vec<Point2<F>>,
    pub sides: Vec<Side>,
}

impl<F> Intersection<F> {
    pub fn none() -> Self {
        Intersection { points: vec![], sides: vec![] }
    }

    fn from_points(points: Vec<Point2<F>>) -> Self {
        Intersection { points, sides: vec![] }
    }

    fn push(&mut self, point: Point2<F>, side: Side) {
        self.points.push(point);
        self.sides.push(side);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<&Point2<F>> {
        self.points.first()
    }

    /// The first rectangle side hit, or `None` when no side was.
    pub fn first_side(&self) -> Option<Side> {
        self.sides.first().copied()
    }

    pub fn iter(&self) -> slice::Iter<'_, Point2<F>> {
        self.points.iter()
    }
}

impl<F> IntoIterator for Intersection<F> {
    type Item = Point2<F>;
    type IntoIter = vec::IntoIter<Point2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

fn circle_point<F: Real>(c: &Circle2<F>, p: &Point2<F>) -> Intersection<F> {
    let d2 = c.pos.distance2(*p);
    if equal(d2, c.radius * c.radius) {
        Intersection::from_points(vec![*p])
    } else {
        Intersection::none()
    }
}

fn rect_point<F: Real>(r: &Rect2<F>, p: &Point2<F>) -> Intersection<F> {
    let mut result = Intersection::none();
    if let Some((side, _)) = r.sides().find(|(_, l)| contains::segment_point(l, p)) {
        result.push(*p, side);
    }
    result
}

/// Solves the two implicit line equations. Parallel segments fall back to
/// whichever endpoints of each lie on the other, so collinear overlaps
/// intersect and disjoint parallels do not.
fn segment_segment<F: Real>(l1: &LineSegment2<F>, l2: &LineSegment2<F>) -> Vec<Point2<F>> {
    let (a1, b1, c1) = l1.coefficients();
    let (a2, b2, c2) = l2.coefficients();
    let det = a1 * b2 - b1 * a2;

    if det == F::zero() {
        trace!("parallel segments, falling back to endpoint containment");
        let (e1, e2) = (l1.endpoints(), l2.endpoints());
        let on_other = e1.iter().filter(|p| contains::segment_point(l2, p))
            .chain(e2.iter().filter(|p| contains::segment_point(l1, p)));

        let mut points: Vec<Point2<F>> = vec![];
        for p in on_other {
            if !points.iter().any(|q| points_equal(q, p)) {
                points.push(*p);
            }
        }
        return points;
    }

    let p = p2((b1 * c2 - b2 * c1) / det, (a2 * c1 - a1 * c2) / det);
    if contains::segment_point(l1, &p) && contains::segment_point(l2, &p) {
        vec![p]
    } else {
        vec![]
    }
}

fn rect_rect<F: Real>(r1: &Rect2<F>, r2: &Rect2<F>) -> Intersection<F> {
    let mut result = Intersection::none();
    for (side, l1) in r1.sides() {
        let mut hit = false;
        for (_, l2) in r2.sides() {
            if let Some(p) = segment_segment(&l1, &l2).first() {
                result.points.push(*p);
                hit = true;
            }
        }
        if hit {
            result.sides.push(side);
        }
    }
    result
}

fn rect_segment<F: Real>(r: &Rect2<F>, l: &LineSegment2<F>) -> Intersection<F> {
    let mut result = Intersection::none();
    for (side, edge) in r.sides() {
        if let Some(p) = segment_segment(l, &edge).first() {
            result.push(*p, side);
        }
    }
    result
}

/// Finds the point of the infinite line closest to the center, then walks a
/// half chord either way from it. Only chord points within the segment are
/// kept.
fn circle_segment<F: Real>(c: &Circle2<F>, l: &LineSegment2<F>) -> Vec<Point2<F>> {
    let v: Vector2<F> = l.vector();
    let len2 = v.magnitude2();
    if len2 == F::zero() {
        trace!("degenerate segment, testing its start point against the circle");
        return circle_point(c, &l.start).points;
    }

    if l.line_distance(c.pos) > c.radius + epsilon() {
        return vec![];
    }

    let closest = l.at(v.dot(c.pos - l.start) / len2);
    let d2 = c.pos.distance2(closest);
    let r2 = c.radius * c.radius;

    // tangent, or grazing within tolerance
    if equal(d2, r2) || d2 > r2 {
        return if contains::segment_point(l, &closest) { vec![closest] } else { vec![] };
    }

    let offset = v.normalize() * (r2 - d2).sqrt();
    [closest + offset, closest - offset].iter()
        .copied()
        .filter(|p| contains::segment_point(l, p))
        .collect()
}

/// Radical line construction. Concentric circles divide by zero: unequal
/// radii come out empty and equal radii give two NaN points. Callers must
/// rule them out (see [`Circle2::checked_intersects`]).
fn circle_circle<F: Real>(c1: &Circle2<F>, c2: &Circle2<F>) -> Intersection<F> {
    let d = c1.pos.distance(c2.pos);
    if d == F::zero() {
        warn!(?c1, ?c2, "intersecting concentric circles, result is undefined");
    }

    let two = F::one() + F::one();
    let (r1, r2) = (c1.radius, c2.radius);
    let a = (r1 * r1 - r2 * r2 + d * d) / (two * d);
    let h2 = r1 * r1 - a * a;
    if h2 < F::zero() && !is_zero(h2) {
        return Intersection::none();
    }

    let u = (c2.pos - c1.pos) / d;
    let p = c1.pos + u * a;
    let offset = perp(u) * h2.max(F::zero()).sqrt();

    let (i1, i2) = (p + offset, p - offset);
    if points_equal(&i1, &i2) {
        Intersection::from_points(vec![i1])
    } else {
        Intersection::from_points(vec![i1, i2])
    }
}

/// No deduplication: a circle through a corner reports it once per side.
fn circle_rect<F: Real>(c: &Circle2<F>, r: &Rect2<F>) -> Intersection<F> {
    let mut result = Intersection::none();
    for (side, edge) in r.sides() {
        for p in circle_segment(c, &edge) {
            result.push(p, side);
        }
    }
    result
}

impl<S: Coord> Circle2<S> {
    /// Like `intersects`, but rejects concentric circles instead of producing
    /// an empty or NaN result:
    ///
    /// ```
    /// # use flatbread::plane::{p2, Circle2};
    /// # use flatbread::error::GeometryError;
    /// let a = Circle2::new(p2(0.0, 0.0), 5.0);
    /// let b = Circle2::new(p2(0.0, 0.0), 3.0);
    /// assert_eq!(a.checked_intersects(&b), Err(GeometryError::Concentric));
    /// ```
    pub fn checked_intersects<T>(&self, other: &Circle2<T>) -> Result<Intersection<Promoted<S, T>>, GeometryError>
    where
        S: Promote<T>,
        T: Coord,
    {
        let a = self.cast::<Promoted<S, T>>();
        let b: Circle2<Promoted<S, T>> = other.cast();
        if a.pos == b.pos {
            Err(GeometryError::Concentric)
        } else {
            Ok(circle_circle(&a, &b))
        }
    }
}

impl<S, T> Intersect<Point2<T>> for Point2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, p: &Point2<T>) -> Self::Output {
        let a: Point2<Promoted<S, T>> = promote(self);
        let b = promote(p);
        if points_equal(&a, &b) {
            Intersection::from_points(vec![b])
        } else {
            Intersection::none()
        }
    }
}

impl<S, T> Intersect<Point2<T>> for LineSegment2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, p: &Point2<T>) -> Self::Output {
        let p = promote(p);
        if contains::segment_point(&self.cast::<Promoted<S, T>>(), &p) {
            Intersection::from_points(vec![p])
        } else {
            Intersection::none()
        }
    }
}

impl<S, T> Intersect<LineSegment2<T>> for Point2<S>
where
    S: Coord,
    T: Promote<S>,
{
    type Output = Intersection<Promoted<T, S>>;

    fn intersects(&self, l: &LineSegment2<T>) -> Self::Output {
        l.intersects(self)
    }
}

/// Reports the first side, in [`Side`] order, whose segment holds the point:
///
/// ```
/// # use flatbread::plane::{p2, v2, Rect2, Side};
/// # use flatbread::util::intersect::Intersect;
/// let r = Rect2::new(p2(0, 0), v2(10, 10));
/// let hit = r.intersects(&p2(0, 0));
/// assert_eq!(hit.sides, vec![Side::Left]);
/// assert!(r.intersects(&p2(5, 5)).is_empty());
/// ```
impl<S, T> Intersect<Point2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, p: &Point2<T>) -> Self::Output {
        rect_point(&self.cast(), &promote(p))
    }
}

impl<S, T> Intersect<Rect2<T>> for Point2<S>
where
    S: Coord,
    T: Promote<S>,
{
    type Output = Intersection<Promoted<T, S>>;

    fn intersects(&self, r: &Rect2<T>) -> Self::Output {
        r.intersects(self)
    }
}

/// Only points on the circle itself intersect; interior points do not.
impl<S, T> Intersect<Point2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, p: &Point2<T>) -> Self::Output {
        circle_point(&self.cast(), &promote(p))
    }
}

impl<S, T> Intersect<Circle2<T>> for Point2<S>
where
    S: Coord,
    T: Promote<S>,
{
    type Output = Intersection<Promoted<T, S>>;

    fn intersects(&self, c: &Circle2<T>) -> Self::Output {
        c.intersects(self)
    }
}

/// ```
/// # use flatbread::plane::{p2, LineSegment2};
/// # use flatbread::util::intersect::Intersect;
/// let a = LineSegment2::new(p2(0.0, 0.0), p2(10.0, 0.0));
/// let b = LineSegment2::new(p2(5.0, -5.0), p2(5.0, 5.0));
/// assert_eq!(a.intersects(&b).points, vec![p2(5.0, 0.0)]);
/// ```
impl<S, T> Intersect<LineSegment2<T>> for LineSegment2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, other: &LineSegment2<T>) -> Self::Output {
        Intersection::from_points(segment_segment(&self.cast(), &other.cast()))
    }
}

impl<S, T> Intersect<Rect2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, other: &Rect2<T>) -> Self::Output {
        rect_rect(&self.cast(), &other.cast())
    }
}

impl<S, T> Intersect<LineSegment2<T>> for Rect2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, l: &LineSegment2<T>) -> Self::Output {
        rect_segment(&self.cast(), &l.cast())
    }
}

impl<S, T> Intersect<Rect2<T>> for LineSegment2<S>
where
    S: Coord,
    T: Promote<S>,
{
    type Output = Intersection<Promoted<T, S>>;

    fn intersects(&self, r: &Rect2<T>) -> Self::Output {
        r.intersects(self)
    }
}

impl<S, T> Intersect<LineSegment2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, l: &LineSegment2<T>) -> Self::Output {
        Intersection::from_points(circle_segment(&self.cast(), &l.cast()))
    }
}

impl<S, T> Intersect<Circle2<T>> for LineSegment2<S>
where
    S: Coord,
    T: Promote<S>,
{
    type Output = Intersection<Promoted<T, S>>;

    fn intersects(&self, c: &Circle2<T>) -> Self::Output {
        c.intersects(self)
    }
}

/// Concentric circles are a precondition violation. Unequal radii report no
/// points and equal radii report two NaN points. Use
/// [`Circle2::checked_intersects`] when centers may coincide.
impl<S, T> Intersect<Circle2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, other: &Circle2<T>) -> Self::Output {
        circle_circle(&self.cast(), &other.cast())
    }
}

impl<S, T> Intersect<Rect2<T>> for Circle2<S>
where
    S: Promote<T>,
    T: Coord,
{
    type Output = Intersection<Promoted<S, T>>;

    fn intersects(&self, r: &Rect2<T>) -> Self::Output {
        circle_rect(&self.cast(), &r.cast())
    }
}

impl<S, T> Intersect<Circle2<T>> for Rect2<S>
where
    S: Coord,
    T: Promote<S>,
{
    type Output = Intersection<Promoted<T, S>>;

    fn intersects(&self, c: &Circle2<T>) -> Self::Output {
        c.intersects(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plane::v2;
    use approx::assert_relative_eq;

    fn assert_points(actual: &[Point2<f64>], expected: &[Point2<f64>]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a.x, e.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, e.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_point_point() {
        let p = p2(1.0, 2.0);
        assert_eq!(p.intersects(&p2(1.0, 2.0)).points, vec![p2(1.0, 2.0)]);
        assert!(p.intersects(&p2(1.0, 3.0)).is_empty());
    }

    #[test]
    fn test_point_delegation() {
        let l = LineSegment2::new(p2(0, 0), p2(4, 0));
        let p = p2(2, 0);
        assert_eq!(p.intersects(&l), l.intersects(&p));
        assert_eq!(l.intersects(&p).points, vec![p2(2.0, 0.0)]);

        let r = Rect2::new(p2(0, 0), v2(4, 4));
        let p = p2(4, 2);
        assert_eq!(p.intersects(&r), r.intersects(&p));
        assert_eq!(r.intersects(&p).sides, vec![Side::Right]);

        let c = Circle2::new(p2(0, 0), 5);
        let p = p2(-3, 4);
        assert_eq!(p.intersects(&c), c.intersects(&p));
        assert_eq!(c.intersects(&p).len(), 1);
    }

    #[test]
    fn test_circle_point_boundary_only() {
        let c = Circle2::new(p2(0.0, 0.0), 5.0);
        assert!(c.intersects(&p2(0.0, 0.0)).is_empty());
        assert!(c.intersects(&p2(6.0, 0.0)).is_empty());
        assert_eq!(c.intersects(&p2(0.0, -5.0)).points, vec![p2(0.0, -5.0)]);
    }

    #[test]
    fn test_rect_point_corner_reports_first_side() {
        let r = Rect2::new(p2(0.0, 0.0), v2(4.0, 4.0));
        // top right is on TOP and RIGHT; TOP comes first
        let hit = r.intersects(&p2(4.0, 0.0));
        assert_eq!(hit.sides, vec![Side::Top]);
        assert_eq!(hit.first_side(), Some(Side::Top));
        // bottom right is on RIGHT and BOTTOM
        assert_eq!(r.intersects(&p2(4.0, 4.0)).sides, vec![Side::Right]);
        let miss = r.intersects(&p2(2.0, 2.0));
        assert!(miss.is_empty());
        assert_eq!(miss.first_side(), None);
    }

    #[test]
    fn test_segment_crossing() {
        let a = LineSegment2::new(p2(0.0, 0.0), p2(10.0, 0.0));
        let b = LineSegment2::new(p2(5.0, -5.0), p2(5.0, 5.0));
        assert_eq!(a.intersects(&b).points, vec![p2(5.0, 0.0)]);
        assert_eq!(b.intersects(&a).points, vec![p2(5.0, 0.0)]);

        let diagonal = LineSegment2::new(p2(0.0, 0.0), p2(4.0, 4.0));
        let anti = LineSegment2::new(p2(0.0, 4.0), p2(4.0, 0.0));
        assert_points(&diagonal.intersects(&anti).points, &[p2(2.0, 2.0)]);
    }

    #[test]
    fn test_segment_lines_cross_outside_span() {
        let a = LineSegment2::new(p2(0.0, 0.0), p2(10.0, 0.0));
        let b = LineSegment2::new(p2(5.0, 1.0), p2(5.0, 5.0));
        assert!(a.intersects(&b).is_empty());
    }

    #[test]
    fn test_segment_touching_endpoints() {
        let a = LineSegment2::new(p2(0, 0), p2(2, 2));
        let b = LineSegment2::new(p2(2, 2), p2(4, 0));
        assert_eq!(a.intersects(&b).points, vec![p2(2.0, 2.0)]);
    }

    #[test]
    fn test_segment_parallel() {
        let a = LineSegment2::new(p2(0.0, 0.0), p2(10.0, 0.0));
        let b = LineSegment2::new(p2(0.0, 5.0), p2(10.0, 5.0));
        assert!(a.intersects(&b).is_empty());
    }

    #[test]
    fn test_segment_collinear() {
        let a = LineSegment2::new(p2(0.0, 0.0), p2(10.0, 0.0));

        let overlapping = LineSegment2::new(p2(15.0, 0.0), p2(5.0, 0.0));
        assert_eq!(a.intersects(&overlapping).points, vec![p2(10.0, 0.0), p2(5.0, 0.0)]);

        let inner = LineSegment2::new(p2(2.0, 0.0), p2(3.0, 0.0));
        assert_eq!(a.intersects(&inner).points, vec![p2(2.0, 0.0), p2(3.0, 0.0)]);

        // shared endpoints are reported once
        assert_eq!(a.intersects(&a).points, vec![p2(0.0, 0.0), p2(10.0, 0.0)]);

        let disjoint = LineSegment2::new(p2(11.0, 0.0), p2(20.0, 0.0));
        assert!(a.intersects(&disjoint).is_empty());
    }

    #[test]
    fn test_degenerate_segments() {
        let dot = LineSegment2::new(p2(5.0, 0.0), p2(5.0, 0.0));
        let a = LineSegment2::new(p2(0.0, 0.0), p2(10.0, 0.0));
        assert_eq!(a.intersects(&dot).points, vec![p2(5.0, 0.0)]);
        assert_eq!(dot.intersects(&a).points, vec![p2(5.0, 0.0)]);

        let elsewhere = LineSegment2::new(p2(5.0, 1.0), p2(5.0, 1.0));
        assert!(a.intersects(&elsewhere).is_empty());
    }

    #[test]
    fn test_rect_rect() {
        let a = Rect2::new(p2(0.0, 0.0), v2(4.0, 4.0));
        let b = Rect2::new(p2(2.0, 2.0), v2(4.0, 4.0));
        let hit = a.intersects(&b);
        // RIGHT of a meets TOP of b, BOTTOM of a meets LEFT of b
        assert_eq!(hit.points, vec![p2(4.0, 2.0), p2(2.0, 4.0)]);
        assert_eq!(hit.sides, vec![Side::Right, Side::Bottom]);

        let far = Rect2::new(p2(10.0, 10.0), v2(1.0, 1.0));
        let miss = a.intersects(&far);
        assert!(miss.is_empty());
        assert!(miss.sides.is_empty());

        // strictly inside: no boundary crossing
        let inner = Rect2::new(p2(1.0, 1.0), v2(1.0, 1.0));
        assert!(a.intersects(&inner).is_empty());
    }

    #[test]
    fn test_rect_segment() {
        let r = Rect2::new(p2(0, 0), v2(10, 10));
        let l = LineSegment2::new(p2(-5.0, 5.0), p2(15.0, 5.0));
        let hit = r.intersects(&l);
        assert_eq!(hit.points, vec![p2(0.0, 5.0), p2(10.0, 5.0)]);
        assert_eq!(hit.sides, vec![Side::Left, Side::Right]);
        assert_eq!(l.intersects(&r), hit);

        let inside = LineSegment2::new(p2(1.0, 1.0), p2(2.0, 2.0));
        assert!(r.intersects(&inside).is_empty());
    }

    #[test]
    fn test_rect_segment_along_side() {
        // overlaps TOP from its left corner to (5, 0)
        let r = Rect2::new(p2(0, 0), v2(10, 10));
        let l = LineSegment2::new(p2(-5, 0), p2(5, 0));
        let hit = r.intersects(&l);
        assert_eq!(hit.points, vec![p2(0.0, 0.0), p2(5.0, 0.0)]);
        assert_eq!(hit.sides, vec![Side::Left, Side::Top]);
        assert_eq!(l.intersects(&r), hit);
    }

    #[test]
    fn test_circle_segment_chord() {
        let c = Circle2::new(p2(0.0, 0.0), 5.0);
        let l = LineSegment2::new(p2(-10.0, 3.0), p2(10.0, 3.0));
        assert_points(&c.intersects(&l).points, &[p2(4.0, 3.0), p2(-4.0, 3.0)]);
        assert_points(&l.intersects(&c).points, &[p2(4.0, 3.0), p2(-4.0, 3.0)]);
    }

    #[test]
    fn test_circle_segment_chord_clipped() {
        let c = Circle2::new(p2(0.0, 0.0), 5.0);
        // the infinite line crosses twice, the segment only reaches one
        let l = LineSegment2::new(p2(0.0, 3.0), p2(10.0, 3.0));
        assert_points(&c.intersects(&l).points, &[p2(4.0, 3.0)]);

        // both crossings lie beyond the segment
        let l = LineSegment2::new(p2(-1.0, 3.0), p2(1.0, 3.0));
        assert!(c.intersects(&l).is_empty());
    }

    #[test]
    fn test_circle_segment_tangent() {
        let c = Circle2::new(p2(0.0, 0.0), 5.0);
        let l = LineSegment2::new(p2(-10.0, 5.0), p2(10.0, 5.0));
        assert_points(&c.intersects(&l).points, &[p2(0.0, 5.0)]);

        // tangent to the line beyond the segment's end
        let l = LineSegment2::new(p2(1.0, 5.0), p2(10.0, 5.0));
        assert!(c.intersects(&l).is_empty());

        let l = LineSegment2::new(p2(-10.0, 6.0), p2(10.0, 6.0));
        assert!(c.intersects(&l).is_empty());
    }

    #[test]
    fn test_circle_degenerate_segment() {
        let c = Circle2::new(p2(0.0, 0.0), 5.0);
        let on = LineSegment2::new(p2(3.0, 4.0), p2(3.0, 4.0));
        assert_eq!(c.intersects(&on).points, vec![p2(3.0, 4.0)]);
        let off = LineSegment2::new(p2(1.0, 1.0), p2(1.0, 1.0));
        assert!(c.intersects(&off).is_empty());
    }

    #[test]
    fn test_circle_circle() {
        let a = Circle2::new(p2(0.0, 0.0), 5.0);
        let b = Circle2::new(p2(8.0, 0.0), 5.0);
        assert_points(&a.intersects(&b).points, &[p2(4.0, 3.0), p2(4.0, -3.0)]);

        let tangent = Circle2::new(p2(10.0, 0.0), 5.0);
        assert_points(&a.intersects(&tangent).points, &[p2(5.0, 0.0)]);

        let internal = Circle2::new(p2(2.0, 0.0), 3.0);
        assert_points(&a.intersects(&internal).points, &[p2(5.0, 0.0)]);

        let inside = Circle2::new(p2(1.0, 0.0), 1.0);
        assert!(a.intersects(&inside).is_empty());

        let far = Circle2::new(p2(20.0, 0.0), 5.0);
        assert!(a.intersects(&far).is_empty());
    }

    #[test]
    fn test_concentric_circles() {
        let a = Circle2::new(p2(1.0, 1.0), 5.0);
        assert!(a.intersects(&Circle2::new(p2(1.0, 1.0), 3.0)).is_empty());

        let hit: Intersection<f64> = a.intersects(&a);
        assert_eq!(hit.len(), 2);
        assert!(hit.iter().all(|p| p.x.is_nan() && p.y.is_nan()));
    }

    #[test]
    fn test_checked_circle_circle() {
        let a = Circle2::new(p2(0, 0), 5);
        let b = Circle2::new(p2(8, 0), 5);
        assert_eq!(a.checked_intersects(&b), Ok(a.intersects(&b)));
        assert_eq!(
            a.checked_intersects(&Circle2::new(p2(0, 0), 5)),
            Err(GeometryError::Concentric)
        );
    }

    #[test]
    fn test_circle_rect() {
        let c = Circle2::new(p2(2.0, 2.0), 2.0);
        let r = Rect2::new(p2(0.0, 0.0), v2(4.0, 4.0));
        let hit = c.intersects(&r);
        assert_points(
            &hit.points,
            &[p2(0.0, 2.0), p2(2.0, 0.0), p2(4.0, 2.0), p2(2.0, 4.0)]
        );
        assert_eq!(hit.sides, Side::ALL.to_vec());
        assert_eq!(r.intersects(&c), hit);
    }

    #[test]
    fn test_circle_rect_corner_repeats() {
        // passes through the top left corner, which both LEFT and TOP report
        let c = Circle2::new(p2(-3.0, -4.0), 5.0);
        let r = Rect2::new(p2(0.0, 0.0), v2(10.0, 10.0));
        let hit = c.intersects(&r);
        assert_points(&hit.points, &[p2(0.0, 0.0), p2(0.0, 0.0)]);
        assert_eq!(hit.sides, vec![Side::Left, Side::Top]);
    }

    #[test]
    fn test_mixed_scalars() {
        let r: Rect2<i32> = Rect2::new(p2(0, 0), v2(10, 10));
        let l: LineSegment2<f32> = LineSegment2::new(p2(5.0, -1.0), p2(5.0, 1.0));
        let hit: Intersection<f32> = r.intersects(&l);
        assert_eq!(hit.points, vec![p2(5.0f32, 0.0)]);
        assert_eq!(hit.sides, vec![Side::Top]);

        let hit: Intersection<f32> = l.intersects(&r);
        assert_eq!(hit.sides, vec![Side::Top]);
    }
}
