use nalgebra::{self as na, point};
use tracing::{debug, trace};

use crate::{
    axis::Axis,
    error::BuildError,
    options::{BuildOptions, NonFinite},
    util::is_finite,
    Point, P2,
};

/// A static 2d kd-tree answering nearest neighbor queries.
///
/// The tree is built once from a set of items and cannot be modified
/// afterwards. Every level splits on the median of the items below it,
/// alternating between the x and y axis, so the tree is balanced by
/// construction.
#[derive(Debug, Clone)]
pub struct KdTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

/// The result of a nearest neighbor query
#[derive(Debug)]
pub struct Neighbor<'a, T> {
    /// The nearest item
    pub item: &'a T,
    /// Squared euclidean distance from the query point to the item
    pub distance_squared: f64,
}

impl<T> Neighbor<'_, T> {
    /// Euclidean distance from the query point to the item
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

impl<T> Clone for Neighbor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighbor<'_, T> {}

impl<T> KdTree<T> {
    /// Create an empty tree. Every query on it returns `None`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of items in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the tree, 0 when empty
    pub fn depth(&self) -> usize {
        Node::height(&self.root)
    }

    /// Iterate over every item in the tree in pre-order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Find the item nearest to `point`
    ///
    /// **Returns** `None` if the tree is empty or the query has non-finite coordinates
    pub fn nearest(&self, point: &P2) -> Option<&T> {
        self.nearest_with_distance(point).map(|n| n.item)
    }

    /// Find the item nearest to `(x, y)`
    pub fn nearest_xy(&self, x: f64, y: f64) -> Option<&T> {
        self.nearest(&point![x, y])
    }

    /// Find the item nearest to `point` along with its squared distance.
    ///
    /// When several items are equally near, the first one reached during the
    /// descent is kept.
    pub fn nearest_with_distance(&self, point: &P2) -> Option<Neighbor<'_, T>> {
        self.search(point).best
    }

    fn search(&self, point: &P2) -> Search<'_, T> {
        let mut search = Search {
            best: None,
            visited: 0,
        };
        if let Some(root) = &self.root {
            root.nearest(point, &mut search);
        }
        search
    }
}

impl<T: Point> KdTree<T> {
    /// Build a tree from a set of items with the default [`BuildOptions`]
    ///
    /// **Returns** an error if any item has a NaN or infinite coordinate
    pub fn build<I>(items: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::build_with(items, &BuildOptions::default())
    }

    /// Build a tree from a set of items
    pub fn build_with<I>(items: I, options: &BuildOptions) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut entries = Vec::with_capacity(items.size_hint().0);
        let mut skipped = 0usize;

        for (index, item) in items.enumerate() {
            let position = item.point();
            if !is_finite(&position) {
                match options.non_finite {
                    NonFinite::Reject => {
                        return Err(BuildError::NonFinite {
                            index,
                            x: position.x,
                            y: position.y,
                        })
                    }
                    NonFinite::Skip => {
                        trace!(index, x = position.x, y = position.y, "skipping non-finite point");
                        skipped += 1;
                        continue;
                    }
                }
            }
            entries.push((position, item));
        }

        let len = entries.len();
        let tree = Self {
            root: Node::build(entries, 0),
            len,
        };
        debug!(points = len, skipped, depth = tree.depth(), "built kd-tree");
        Ok(tree)
    }
}

impl<T> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a KdTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of a [`KdTree`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// State of a single nearest neighbor query
struct Search<'a, T> {
    best: Option<Neighbor<'a, T>>,
    /// Nodes whose distance was computed
    visited: usize,
}

/// KdTree node
///
/// Items in `left` are at or below this node's coordinate on `axis`, items in
/// `right` are at or above it.
#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    position: P2,
    axis: Axis,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl<T> Node<T> {
    fn build(mut entries: Vec<(P2, T)>, depth: usize) -> Option<Box<Self>> {
        if entries.is_empty() {
            return None;
        }

        let axis = Axis::from_depth(depth);
        // Coordinates are finite here. total_cmp puts -0.0 before 0.0, which
        // compare equal, so the split invariant still holds.
        entries.sort_by(|(a, _), (b, _)| axis.coord(a).total_cmp(&axis.coord(b)));

        let median = entries.len() / 2;
        let right = entries.split_off(median + 1);
        let (position, item) = entries.pop()?;

        Some(Box::new(Self {
            item,
            position,
            axis,
            left: Self::build(entries, depth + 1),
            right: Self::build(right, depth + 1),
        }))
    }

    fn nearest<'a>(&'a self, query: &P2, search: &mut Search<'a, T>) {
        search.visited += 1;
        let distance_squared = na::distance_squared(&self.position, query);
        let closer = match search.best {
            Some(b) => distance_squared < b.distance_squared,
            None => !distance_squared.is_nan(),
        };
        if closer {
            search.best = Some(Neighbor {
                item: &self.item,
                distance_squared,
            });
        }

        let split = self.axis.coord(&self.position);
        let value = self.axis.coord(query);
        let (near, far) = if value < split {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };

        if let Some(near) = near {
            near.nearest(query, search);
        }

        if let Some(far) = far {
            let plane_distance_squared = (split - value).powi(2);
            if search.best.map_or(true, |b| plane_distance_squared < b.distance_squared) {
                far.nearest(query, search);
            }
        }
    }

    fn height(node: &Option<Box<Self>>) -> usize {
        match node {
            Some(node) => 1 + Self::height(&node.left).max(Self::height(&node.right)),
            None => 0,
        }
    }
}
