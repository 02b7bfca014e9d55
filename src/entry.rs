use nalgebra::point;

use crate::{Point, P2};

/// A position paired with an opaque payload.
///
/// The tree only ever reads `position`. The payload is handed back untouched
/// from queries, so a small identifier such as an index into a caller-owned
/// array is usually the right choice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub position: P2,
    pub payload: T,
}

impl<T> Entry<T> {
    /// Create a new entry at `(x, y)`
    pub fn new(x: f64, y: f64, payload: T) -> Self {
        Self {
            position: point![x, y],
            payload,
        }
    }

    /// Create a new entry at an existing point
    pub fn at(position: P2, payload: T) -> Self {
        Self { position, payload }
    }
}

impl<T> Point for Entry<T> {
    fn point(&self) -> P2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_exposes_position() {
        let entry = Entry::new(1.5, 2.5, 7usize);
        assert_eq!(entry.point(), point![1.5, 2.5], "Position should match");
        assert_eq!(entry.payload, 7, "Payload should be kept as is");
        assert_eq!(
            Entry::at(point![1.5, 2.5], 7usize),
            entry,
            "Both constructors should agree"
        );
    }
}
