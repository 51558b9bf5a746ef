//! Graph vertices.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A road-map intersection, identified by its index in `[0, node_count)`.
///
/// Nodes are handed out by [`RoadGraph`](super::RoadGraph), which creates
/// exactly one per index. Visitation is not part of a node's identity and
/// lives in the searching [`PathFinder`](crate::search::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    index: usize,
}

impl Node {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self { index }
    }

    /// The node's index.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

impl From<Node> for usize {
    fn from(node: Node) -> usize {
        node.index
    }
}
