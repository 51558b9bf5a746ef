//! An undirected road graph with kind-tagged edges.
//!
//! Topology is fixed once built: nodes are created up front, edges can be
//! inserted but never removed. Each node keeps its neighbours in a
//! `BTreeMap` keyed by neighbour index, so incident edges always come out in
//! ascending neighbour order. Depth-first search relies on that order to be
//! deterministic.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::error::{GraphError, GraphResult};

use super::{Edge, EdgeKind, Node};

/// Undirected road graph over nodes `0..node_count`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `node` | \(O(1)\) | bounds check only |
/// | `insert_edge` | \(O(\log d)\) | two map inserts |
/// | `edge_between` | \(O(\log d)\) | |
/// | `incident_edges` | \(O(1)\) + \(O(d)\) to drain | ascending neighbour order |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadGraph {
    adjacency: Vec<BTreeMap<usize, EdgeKind>>,
}

impl RoadGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); node_count],
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Count each road once, from its lower endpoint.
        self.adjacency
            .iter()
            .enumerate()
            .map(|(u, nbrs)| nbrs.range(u..).count())
            .sum()
    }

    /// Returns the node with the given index.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `index >= node_count()`.
    pub fn node(&self, index: usize) -> GraphResult<Node> {
        self.check(index)?;
        Ok(Node::new(index))
    }

    /// Signed lookup for indices that come from outside the crate (map files,
    /// command lines). Negative indices are rejected the same way as
    /// too-large ones.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `raw` is outside `[0, node_count)`.
    pub fn resolve(&self, raw: i64) -> GraphResult<Node> {
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < self.node_count())
            .map(Node::new)
            .ok_or(GraphError::InvalidNode {
                index: raw,
                node_count: self.node_count(),
            })
    }

    /// Iterates over all nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.node_count()).map(Node::new)
    }

    /// Inserts an undirected edge of the given kind between `u` and `v`.
    ///
    /// Both directions are stored with the same kind. On error the graph is
    /// left untouched.
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if either endpoint is out of range.
    /// - [`GraphError::DuplicateEdge`] if `u` and `v` are already adjacent.
    pub fn insert_edge(&mut self, u: usize, v: usize, kind: EdgeKind) -> GraphResult<()> {
        self.check(u)?;
        self.check(v)?;
        if self.adjacency[u].contains_key(&v) {
            return Err(GraphError::DuplicateEdge { u, v });
        }
        self.adjacency[u].insert(v, kind);
        self.adjacency[v].insert(u, kind);
        Ok(())
    }

    /// Edges with `u` as first endpoint, in ascending order of the other
    /// endpoint. Empty (not an error) when `u` has no roads.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `u` is out of range.
    pub fn incident_edges(&self, u: usize) -> GraphResult<IncidentEdges<'_>> {
        self.check(u)?;
        Ok(IncidentEdges {
            from: Node::new(u),
            inner: self.adjacency[u].iter(),
        })
    }

    /// The edge from `u` to `v`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if either endpoint is out of range.
    /// - [`GraphError::NoSuchEdge`] if they are not adjacent.
    pub fn edge_between(&self, u: usize, v: usize) -> GraphResult<Edge> {
        self.check(u)?;
        self.check(v)?;
        self.adjacency[u]
            .get(&v)
            .map(|&kind| Edge::new(Node::new(u), Node::new(v), kind))
            .ok_or(GraphError::NoSuchEdge { u, v })
    }

    /// Whether `u` and `v` share an edge.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if either endpoint is out of range.
    pub fn are_adjacent(&self, u: usize, v: usize) -> GraphResult<bool> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.adjacency[u].contains_key(&v))
    }

    /// Number of roads at `u`.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `u` is out of range.
    pub fn degree(&self, u: usize) -> GraphResult<usize> {
        self.check(u)?;
        Ok(self.adjacency[u].len())
    }

    #[inline]
    fn check(&self, index: usize) -> GraphResult<()> {
        if index < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::invalid_node(index, self.node_count()))
        }
    }
}

/// Iterator over the edges leaving one node, in ascending neighbour order.
#[derive(Debug, Clone)]
pub struct IncidentEdges<'a> {
    from: Node,
    inner: btree_map::Iter<'a, usize, EdgeKind>,
}

impl Iterator for IncidentEdges<'_> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Edge> {
        self.inner
            .next()
            .map(|(&to, &kind)| Edge::new(self.from, Node::new(to), kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IncidentEdges<'_> {}
