/// A type that implements `Container<P>` can decide, for any value of `P`,
/// whether every point of that value lies within its closed region. Points
/// on the boundary are inside.
///
/// Unlike `PartialOrd`, there is no symmetry: the container and the queried
/// value usually have different types, and `a.contains(&b)` says nothing
/// about `b.contains(&a)`.
///
/// All boundary tests are subject to
/// [`EPSILON`](crate::util::tolerance::EPSILON).
pub trait Container<P> {
    fn contains(&self, p: &P) -> bool;
}
