//! A generic 2d kd-tree for nearest neighbor lookup.
//!
//! The tree is built once from a static set of items and queried read-only
//! afterwards. Items are anything implementing [`Point`]; the tree never looks
//! at them beyond their position.
//!
//! ```
//! use kdtree::{Entry, KdTree};
//!
//! let tree = KdTree::build(vec![
//!     Entry::new(0.0, 0.0, "A"),
//!     Entry::new(10.0, 10.0, "B"),
//!     Entry::new(10.0, 0.0, "C"),
//! ])
//! .unwrap();
//!
//! let nearest = tree.nearest_xy(9.0, 1.0).unwrap();
//! assert_eq!(nearest.payload, "C");
//! ```

use nalgebra::Point2;

mod axis;
mod entry;
mod error;
mod focus;
mod kdtree;
mod options;
mod util;

pub use axis::Axis;
pub use entry::Entry;
pub use error::BuildError;
pub use focus::{Focus, FocusChange};
pub use kdtree::{Iter, KdTree, Neighbor};
pub use options::{BuildOptions, NonFinite};

/// 2d point with `f64` coordinates
pub type P2 = Point2<f64>;

/// Trait for getting a 2d point position of data stored in the [`KdTree`]
pub trait Point {
    /// Get 2d point position
    fn point(&self) -> P2;
}

impl Point for P2 {
    fn point(&self) -> P2 {
        *self
    }
}

impl<T: Point> Point for &T {
    fn point(&self) -> P2 {
        (**self).point()
    }
}
