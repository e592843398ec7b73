//! A vantage-point tree for nearest-neighbor search.
//!
//! A [`VpTree`] partitions a fixed set of points by picking a vantage point and
//! splitting the remaining points at the median distance to that vantage
//! point. Points no farther than the median, the node's radius, go into the
//! inner subtree, all others into the outer subtree. A query then descends
//! into the side the query point falls on and only visits the other side if
//! the sphere around the query point with the best distance so far crosses the
//! radius.
//!
//! That pruning is only exact if the distance is a true metric, i.e., if it
//! satisfies the triangle inequality. CIEDE2000 does not. Hence a tree with
//! [`DeltaE00`] as its metric may occasionally return a near-nearest instead of
//! the nearest neighbor. It never reports a distance smaller than the true
//! nearest neighbor's, since every reported distance is the actual distance to
//! the reported point. [`VpTree::nearest_exhaustive`] performs the linear scan
//! for when exactness matters more than speed.

use crate::core::{ciede2000, find_closest};
use crate::Float;

/// A distance function over points.
pub trait Metric<P> {
    /// Compute the distance between the two points. Implementations must be
    /// deterministic, non-negative, and zero for identical points.
    fn distance(&self, p1: &P, p2: &P) -> Float;
}

/// The CIEDE2000 color difference between Lab coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeltaE00;

impl Metric<[Float; 3]> for DeltaE00 {
    #[inline]
    fn distance(&self, p1: &[Float; 3], p2: &[Float; 3]) -> Float {
        ciede2000(p1, p2)
    }
}

/// A node of a vantage-point tree.
///
/// A node identifies its vantage point by index into the tree's points. Every
/// point in the inner subtree has at most distance `radius` from the vantage
/// point, every point in the outer subtree more. Leaves have radius zero.
#[derive(Debug)]
pub struct Node {
    index: usize,
    radius: Float,
    inner: Option<Box<Node>>,
    outer: Option<Box<Node>>,
}

impl Node {
    /// Get the index of the vantage point.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the median distance from the vantage point.
    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Get the subtree with the points within the radius.
    pub fn inner(&self) -> Option<&Node> {
        self.inner.as_deref()
    }

    /// Get the subtree with the points beyond the radius.
    pub fn outer(&self) -> Option<&Node> {
        self.outer.as_deref()
    }

    fn depth(node: Option<&Node>) -> usize {
        node.map_or(0, |n| 1 + Self::depth(n.inner()).max(Self::depth(n.outer())))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Partition the distances between `left` and `right`, inclusive, around the
/// distance at the pivot index, permuting the indices in lockstep. This
/// function returns the pivot's final position.
fn partition(
    distances: &mut [Float],
    indices: &mut [usize],
    left: usize,
    right: usize,
    pivot: usize,
) -> usize {
    let pivot_distance = distances[pivot];
    distances.swap(pivot, right);
    indices.swap(pivot, right);

    let mut store = left;
    for index in left..right {
        if distances[index] < pivot_distance {
            distances.swap(index, store);
            indices.swap(index, store);
            store += 1;
        }
    }

    distances.swap(store, right);
    indices.swap(store, right);
    store
}

/// Reorder the distances between `left` and `right`, inclusive, so that the
/// `k`-th smallest distance ends up at position `k`, permuting the indices in
/// lockstep. The pivot is the median of the left, middle, and right distances.
fn quick_select(
    distances: &mut [Float],
    indices: &mut [usize],
    mut left: usize,
    mut right: usize,
    k: usize,
) {
    while left < right {
        let mid = left + (right - left) / 2;
        let (dl, dm, dr) = (distances[left], distances[mid], distances[right]);

        let pivot = if dl > dm {
            if dm > dr {
                mid
            } else if dl > dr {
                right
            } else {
                left
            }
        } else if dl > dr {
            left
        } else if dm > dr {
            right
        } else {
            mid
        };

        let pivot = partition(distances, indices, left, right, pivot);
        if k == pivot {
            return;
        } else if k < pivot {
            right = pivot - 1;
        } else {
            left = pivot + 1;
        }
    }
}

/// The state for building a tree. The scratch buffers are allocated once and
/// reused by every recursive step.
struct Builder<'a, P, M> {
    points: &'a [P],
    metric: &'a M,
    indices: Vec<usize>,
    index_buffer: Vec<usize>,
    distance_buffer: Vec<Float>,
}

impl<P, M: Metric<P>> Builder<'_, P, M> {
    /// Build the subtree for the indices in `start..end`.
    fn build(&mut self, start: usize, end: usize) -> Option<Box<Node>> {
        if end <= start {
            return None;
        }

        let vantage = self.indices[start];
        let count = end - start;
        if count == 1 {
            return Some(Box::new(Node {
                index: vantage,
                radius: 0.0,
                inner: None,
                outer: None,
            }));
        }

        let others = count - 1;
        for (offset, &index) in self.indices[start + 1..end].iter().enumerate() {
            self.index_buffer[offset] = index;
            self.distance_buffer[offset] = self
                .metric
                .distance(&self.points[vantage], &self.points[index]);
        }

        let mid = (count - 1) / 2;
        quick_select(
            &mut self.distance_buffer[..others],
            &mut self.index_buffer[..others],
            0,
            others - 1,
            mid,
        );
        let radius = self.distance_buffer[mid];

        let mut inner_end = start + 1;
        let mut outer_start = end;
        for offset in 0..others {
            if self.distance_buffer[offset] <= radius {
                self.indices[inner_end] = self.index_buffer[offset];
                inner_end += 1;
            } else {
                outer_start -= 1;
                self.indices[outer_start] = self.index_buffer[offset];
            }
        }

        let inner = self.build(start + 1, inner_end);
        let outer = self.build(inner_end, end);
        Some(Box::new(Node {
            index: vantage,
            radius,
            inner,
            outer,
        }))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A vantage-point tree over an owned, immutable set of points.
///
/// Building a tree is deterministic for the same points in the same order.
/// Once built, a tree is never mutated and hence can be shared between
/// threads for concurrent queries.
#[derive(Debug)]
pub struct VpTree<P, M = DeltaE00> {
    points: Vec<P>,
    metric: M,
    root: Option<Box<Node>>,
}

impl<P, M: Metric<P>> VpTree<P, M> {
    /// Build a new tree for the given points and metric.
    pub fn new(points: Vec<P>, metric: M) -> Self {
        let count = points.len();
        let scratch = count.saturating_sub(1);

        let root = {
            let mut builder = Builder {
                points: &points,
                metric: &metric,
                indices: (0..count).collect(),
                index_buffer: vec![0; scratch],
                distance_buffer: vec![0.0; scratch],
            };
            builder.build(0, count)
        };

        Self {
            points,
            metric,
            root,
        }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Determine whether this tree has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Access the points in their original order.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Access the metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Access the root node.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Determine the depth of this tree, with an empty tree having depth 0 and
    /// a single leaf having depth 1.
    pub fn depth(&self) -> usize {
        Node::depth(self.root())
    }

    /// Create an iterator over the nodes in pre-order, i.e., each node before
    /// its inner subtree before its outer subtree.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Find the point nearest to the query.
    ///
    /// This method returns the index and distance of the nearest point found,
    /// or `None` if the tree is empty. See the [module
    /// documentation](crate::vptree) for why the result may not be the global
    /// nearest neighbor.
    pub fn nearest(&self, query: &P) -> Option<(usize, Float)> {
        let mut best = Best {
            distance: Float::INFINITY,
            index: None,
        };
        self.search(self.root(), query, &mut best);
        best.index.map(|index| (index, best.distance))
    }

    fn search(&self, node: Option<&Node>, query: &P, best: &mut Best) {
        let Some(node) = node else {
            return;
        };

        let distance = self.metric.distance(&self.points[node.index], query);
        if distance < best.distance {
            best.distance = distance;
            best.index = Some(node.index);
        }

        let (nearer, farther) = if distance <= node.radius {
            (node.inner(), node.outer())
        } else {
            (node.outer(), node.inner())
        };

        self.search(nearer, query, best);
        if (distance - node.radius).abs() <= best.distance {
            self.search(farther, query, best);
        }
    }

    /// Find the point nearest to the query by linear scan.
    ///
    /// Unlike [`VpTree::nearest`], this method always returns the global
    /// nearest neighbor, with ties going to the lower index.
    pub fn nearest_exhaustive(&self, query: &P) -> Option<(usize, Float)> {
        find_closest(query, &self.points, |p1, p2| self.metric.distance(p1, p2))
    }
}

struct Best {
    distance: Float,
    index: Option<usize>,
}

/// An iterator over a tree's nodes in pre-order.
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(outer) = node.outer() {
            self.stack.push(outer);
        }
        if let Some(inner) = node.inner() {
            self.stack.push(inner);
        }
        Some(node)
    }
}
