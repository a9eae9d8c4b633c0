//! Errors returned when building paths.

/// Reasons a [`Path`](crate::Path) cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Fitting a smooth path needs a start, at least one control point and an end.
    #[error("a path needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
    /// A path must contain at least one curve.
    #[error("a path needs at least one curve")]
    EmptyPath,
}
