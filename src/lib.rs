//! A library of containment and intersection predicates between
//! two-dimensional points, line segments, axis-aligned rectangles and
//! circles:
//!
//! ```
//! use flatbread::plane::{p2, v2, Circle2, LineSegment2, Rect2, Side};
//! use flatbread::{contains, intersects};
//!
//! let r = Rect2::new(p2(0, 0), v2(10, 10));
//! let l = LineSegment2::new(p2(-5.0, 5.0), p2(15.0, 5.0));
//!
//! assert!(!contains(&r, &l));
//! let hit = intersects(&r, &l);
//! assert_eq!(hit.points, vec![p2(0.0, 5.0), p2(10.0, 5.0)]);
//! assert_eq!(hit.sides, vec![Side::Left, Side::Right]);
//!
//! let c = Circle2::new(p2(5, 5), 2);
//! assert!(contains(&r, &c));
//! assert!(intersects(&c, &r).is_empty());
//! ```
//!
//! Shapes may be built over any numeric coordinate type, and two shapes with
//! different coordinate types can be compared directly. See
//! [`util::scalar`] for how the pair is promoted.
extern crate cgmath;
pub mod error;
pub mod plane;
pub mod util;

pub use error::GeometryError;
pub use plane::{Circle2, Intersection, LineSegment2, Rect2, Side};
pub use util::container::Container;
pub use util::intersect::Intersect;

/// Whether `a` contains `b`, boundary included.
pub fn contains<A: Container<B>, B>(a: &A, b: &B) -> bool {
    a.contains(b)
}

/// Where the boundaries of `a` and `b` meet.
pub fn intersects<A: Intersect<B>, B>(a: &A, b: &B) -> A::Output {
    a.intersects(b)
}
