use thiserror::Error;

/// Errors raised while building a [`KdTree`](crate::KdTree)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// An input point had a NaN or infinite coordinate
    #[error("point {index} has non-finite coordinates ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
}
