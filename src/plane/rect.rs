use std::convert::TryFrom;
use std::fmt;

use cgmath::{Point2, Vector2};

use crate::error::GeometryError;
use crate::plane::{v2, LineSegment2};
use crate::util::scalar::{promote, promote_vector, Coord, Real};

/// One of the four boundary segments of a [`Rect2`].
///
/// The discriminants are fixed: every routine that walks a rectangle's
/// boundary does so in `Left, Top, Right, Bottom` order, and every reported
/// side refers to this numbering.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Side {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Side {
    type Error = GeometryError;

    fn try_from(i: u8) -> Result<Side, GeometryError> {
        Side::ALL.get(i as usize).copied().ok_or(GeometryError::InvalidSide(i))
    }
}

/// An axis-aligned rectangle with its top left corner at `pos`:
///
/// ```
/// # use flatbread::plane::{p2, v2, Rect2, Side};
/// let r = Rect2::new(p2(1, 2), v2(4, 3));
/// assert_eq!(r.bottom_right(), p2(5, 5));
/// assert_eq!(r.side(Side::Right).start, p2(5, 2));
/// assert_eq!(r.area(), 12);
/// ```
///
/// `size` is expected to be non-negative. [`Rect2::new`] does not check
/// this; [`Rect2::try_new`] does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2<S> {
    pub pos: Point2<S>,
    pub size: Vector2<S>,
}

impl<S: Coord> Rect2<S> {
    pub fn new(pos: Point2<S>, size: Vector2<S>) -> Self {
        Rect2 { pos, size }
    }

    pub fn try_new(pos: Point2<S>, size: Vector2<S>) -> Result<Self, GeometryError> {
        let rect = Rect2 { pos, size };
        match rect.validate() {
            Some(err) => Err(err),
            None => Ok(rect),
        }
    }

    pub fn validate(&self) -> Option<GeometryError> {
        if self.size.x < S::zero() || self.size.y < S::zero() {
            Some(GeometryError::NegativeSize)
        } else {
            None
        }
    }

    pub fn cast<F: Real>(&self) -> Rect2<F> {
        Rect2 {
            pos: promote(&self.pos),
            size: promote_vector(&self.size),
        }
    }

    pub fn area(&self) -> S {
        self.size.x * self.size.y
    }

    pub fn perimeter(&self) -> S {
        let two = S::one() + S::one();
        two * (self.size.x + self.size.y)
    }

    pub fn top_left(&self) -> Point2<S> {
        self.pos
    }

    pub fn top_right(&self) -> Point2<S> {
        self.pos + v2(self.size.x, S::zero())
    }

    pub fn bottom_left(&self) -> Point2<S> {
        self.pos + v2(S::zero(), self.size.y)
    }

    pub fn bottom_right(&self) -> Point2<S> {
        self.pos + self.size
    }

    /// Corners in top left, top right, bottom left, bottom right order.
    pub fn corners(&self) -> [Point2<S>; 4] {
        [self.top_left(), self.top_right(), self.bottom_left(), self.bottom_right()]
    }

    pub fn left(&self) -> LineSegment2<S> {
        LineSegment2::new(self.top_left(), self.bottom_left())
    }

    pub fn top(&self) -> LineSegment2<S> {
        LineSegment2::new(self.top_left(), self.top_right())
    }

    pub fn right(&self) -> LineSegment2<S> {
        LineSegment2::new(self.top_right(), self.bottom_right())
    }

    pub fn bottom(&self) -> LineSegment2<S> {
        LineSegment2::new(self.bottom_left(), self.bottom_right())
    }

    pub fn side(&self, side: Side) -> LineSegment2<S> {
        match side {
            Side::Left => self.left(),
            Side::Top => self.top(),
            Side::Right => self.right(),
            Side::Bottom => self.bottom(),
        }
    }

    /// The four boundary segments, in [`Side`] order.
    pub fn sides(&self) -> impl Iterator<Item=(Side, LineSegment2<S>)> + '_ {
        Side::ALL.iter().map(move |&side| (side, self.side(side)))
    }
}

impl<S: fmt::Display> fmt::Display for Rect2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "rect ({}, {}) size ({}, {})",
            self.pos.x, self.pos.y, self.size.x, self.size.y
        )
    }
}
