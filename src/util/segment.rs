use core::ops::Sub;

/// A directed span between two points.
pub trait Segment {
    type Point;

    fn from_endpoints(start: Self::Point, end: Self::Point) -> Self;
    fn start(&self) -> Self::Point;
    fn end(&self) -> Self::Point;

    fn vector<V>(&self) -> V
    where Self::Point: Sub<Output=V>
    {
        self.end() - self.start()
    }

    fn endpoints(&self) -> [Self::Point; 2] {
        [self.start(), self.end()]
    }

    /// The same span traversed from `end` to `start`.
    fn reversed(&self) -> Self
    where Self: Sized
    {
        Self::from_endpoints(self.end(), self.start())
    }
}
