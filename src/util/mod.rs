pub mod compare;
pub mod container;
pub mod intersect;
pub mod scalar;
pub mod segment;
pub mod tolerance;
