//! Scalar traits shared by every shape.
//!
//! Shapes are generic over any [`Coord`]. Predicates between two shapes with
//! different scalar types run in the [`Promote::Output`] of the pair, which is
//! always a [`Real`] (predicates need square roots and division even when
//! both inputs are integral).
use cgmath::{BaseFloat, BaseNum, Point2, Vector2};
use num_traits::AsPrimitive;

/// Any numeric type usable as a shape coordinate.
pub trait Coord: BaseNum + AsPrimitive<f32> + AsPrimitive<f64> {}

impl<T> Coord for T where T: BaseNum + AsPrimitive<f32> + AsPrimitive<f64> {}

/// A floating point coordinate the engine computes in.
pub trait Real: BaseFloat + Coord {
    /// Converts any coordinate into this type, as with `as`.
    fn of<C: Coord>(c: C) -> Self;
}

impl Real for f32 {
    fn of<C: Coord>(c: C) -> f32 {
        <C as AsPrimitive<f32>>::as_(c)
    }
}

impl Real for f64 {
    fn of<C: Coord>(c: C) -> f64 {
        <C as AsPrimitive<f64>>::as_(c)
    }
}

/// The common type two coordinate types are promoted to before comparison.
///
/// Follows ordinary numeric promotion, except that two integers promote to
/// `f64`:
///
/// ```
/// # use flatbread::util::scalar::Promoted;
/// let a: Promoted<i32, f32> = 1.5f32;
/// let b: Promoted<f32, f64> = 1.5f64;
/// let c: Promoted<i32, i32> = 1.5f64;
/// # let _ = (a, b, c);
/// ```
pub trait Promote<Rhs: Coord>: Coord {
    type Output: Real;
}

/// Shorthand for `<S as Promote<T>>::Output`.
pub type Promoted<S, T> = <S as Promote<T>>::Output;

impl Promote<f32> for f32 { type Output = f32; }
impl Promote<f64> for f32 { type Output = f64; }
impl Promote<f32> for f64 { type Output = f64; }
impl Promote<f64> for f64 { type Output = f64; }

macro_rules! promote_integers {
    (@with $lhs:ty; $($rhs:ty),*) => {$(
        impl Promote<$rhs> for $lhs { type Output = f64; }
    )*};
    ($($int:ty),*) => {$(
        impl Promote<f32> for $int { type Output = f32; }
        impl Promote<$int> for f32 { type Output = f32; }
        impl Promote<f64> for $int { type Output = f64; }
        impl Promote<$int> for f64 { type Output = f64; }
        promote_integers!(@with $int; i8, i16, i32, i64, u8, u16, u32, u64);
    )*};
}

promote_integers!(i8, i16, i32, i64, u8, u16, u32, u64);

pub fn promote<S: Coord, F: Real>(p: &Point2<S>) -> Point2<F> {
    Point2::new(F::of(p.x), F::of(p.y))
}

pub fn promote_vector<S: Coord, F: Real>(v: &Vector2<S>) -> Vector2<F> {
    Vector2::new(F::of(v.x), F::of(v.y))
}
