use thiserror::Error;

/// Violations of shape conventions, and the one predicate precondition that
/// can be checked up front.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GeometryError {
    #[error("side index {0} is out of range, expected 0..=3")]
    InvalidSide(u8),

    #[error("rectangle size must be non-negative on both axes")]
    NegativeSize,

    #[error("circle radius must be non-negative")]
    NegativeRadius,

    #[error("circles share a center, their intersection is undefined")]
    Concentric,
}
