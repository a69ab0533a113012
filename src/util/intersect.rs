/// A generic trait for two objects whose boundaries can cross or touch.
///
/// Implementations come in mirrored pairs: `a.intersects(&b)` and
/// `b.intersects(&a)` find the same set of points, though not necessarily in
/// the same order.
pub trait Intersect<K> {
    type Output;

    fn intersects(&self, other: &K) -> Self::Output;
}
