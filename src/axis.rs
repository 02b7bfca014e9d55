use crate::P2;

/// Coordinate axis a tree node splits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Splitting axis for a node at the given depth, alternating from x at the root
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Self::X
        } else {
            Self::Y
        }
    }

    /// Project a point onto this axis
    pub fn coord(self, point: &P2) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}
