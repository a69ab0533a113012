//! Planar shapes and the predicates between them.
//!
//! Coordinates follow a y-down convention: a [`Rect2`]'s `pos` is its top
//! left corner.
pub mod circle;
pub mod contains;
pub mod intersect;
pub mod rect;
pub mod segment;

pub use cgmath::{Point2, Vector2};

pub use circle::Circle2;
pub use intersect::Intersection;
pub use rect::{Rect2, Side};
pub use segment::LineSegment2;

pub fn p2<T>(x: T, y: T) -> Point2<T> {
    Point2::new(x, y)
}
pub use cgmath::vec2 as v2;
