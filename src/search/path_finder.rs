//! Budget-constrained depth-first route search.
//!
//! The search walks the graph depth-first, trying neighbours in ascending
//! index order, and returns the first route that reaches the destination
//! without the budget ever dropping below zero on a toll or reward road.
//! It is not a shortest or cheapest path search.
//!
//! Recursion is replaced by an explicit stack of [`Frame`]s. Each frame
//! remembers the budget it was entered with, so backtracking out of a dead
//! end restores the budget to the parent frame's entry budget exactly,
//! without re-deriving the charge that was applied. Siblings are therefore
//! always tried with the budget the parent held on entry.
//!
//! Visitation marks live in a [`VisitedSet`] owned by the `PathFinder`, not
//! in the graph. After a search the marks are in a defined terminal state:
//! exactly the nodes of the returned route after a success, none after
//! [`SearchOutcome::NotFound`] or an error.

use serde::Serialize;

use crate::error::GraphResult;
use crate::graph::{IncidentEdges, Node, RoadGraph, VisitedSet};

use super::{Tariff, Trip};

/// A discovered route, start first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    nodes: Vec<Node>,
    budgets: Vec<i64>,
}

impl Route {
    /// Nodes from start to destination.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Budget on arrival at each node; `budgets()[0]` is the initial budget.
    pub fn budgets(&self) -> &[i64] {
        &self.budgets
    }

    /// Node indices from start to destination.
    pub fn indices(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.index()).collect()
    }

    /// Budget left on arrival at the destination.
    pub fn final_budget(&self) -> i64 {
        // A route always holds at least the start node.
        self.budgets.last().copied().unwrap_or_default()
    }

    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a route contains at least its start node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Result of a search that met no structural error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A feasible route was found.
    Found(Route),
    /// Every branch was exhausted without reaching the destination.
    NotFound,
}

impl SearchOutcome {
    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound => None,
        }
    }

    /// Consumes the outcome, returning the route if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound => None,
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// One node on the active search path.
#[derive(Debug)]
struct Frame<'g> {
    node: usize,
    /// Budget held when this node was entered.
    entry_budget: i64,
    /// Incident edges not yet tried.
    edges: IncidentEdges<'g>,
}

/// Budget-constrained depth-first search over a [`RoadGraph`].
///
/// The graph is borrowed read-only; all mutable search state belongs to the
/// finder, so several finders may search the same graph at once. A single
/// finder can be reused for any number of sequential searches.
#[derive(Debug, Clone)]
pub struct PathFinder<'g> {
    graph: &'g RoadGraph,
    tariff: Tariff,
    visited: VisitedSet,
}

impl<'g> PathFinder<'g> {
    /// Creates a finder for `graph` charging according to `tariff`.
    pub fn new(graph: &'g RoadGraph, tariff: Tariff) -> Self {
        Self {
            graph,
            tariff,
            visited: VisitedSet::new(graph.node_count()),
        }
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g RoadGraph {
        self.graph
    }

    /// The tariff in force.
    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    /// Visitation mark of `index` as left by the last search.
    ///
    /// # Panics
    /// Panics if `index >= graph.node_count()`.
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.is_visited(index)
    }

    /// The full visitation overlay as left by the last search.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Resolves the trip's signed indices and runs [`find_path`](Self::find_path).
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`](crate::GraphError::InvalidNode) if either
    /// index is negative or out of range.
    pub fn find_trip(&mut self, trip: &Trip) -> GraphResult<SearchOutcome> {
        let start = self.graph.resolve(trip.start)?;
        let destination = self.graph.resolve(trip.destination)?;
        self.find_path(start.index(), destination.index(), trip.budget)
    }

    /// Searches for a route from `start` to `destination` with `budget` in hand.
    ///
    /// Returns the first feasible route in ascending-neighbour DFS order, or
    /// [`SearchOutcome::NotFound`] once every branch is exhausted.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`](crate::GraphError::InvalidNode) if either
    /// endpoint is out of range, or if the graph reports a structural error
    /// mid-search. Errors abort the search; they are never folded into
    /// `NotFound`.
    pub fn find_path(
        &mut self,
        start: usize,
        destination: usize,
        budget: i64,
    ) -> GraphResult<SearchOutcome> {
        self.visited.clear();

        #[cfg(feature = "tracing")]
        tracing::debug!(start, destination, budget, "route search started");

        let result = self.search(start, destination, budget);
        if result.is_err() {
            self.visited.clear();
        }

        #[cfg(feature = "tracing")]
        match &result {
            Ok(SearchOutcome::Found(route)) => tracing::debug!(
                hops = route.len() - 1,
                final_budget = route.final_budget(),
                "route found"
            ),
            Ok(SearchOutcome::NotFound) => tracing::debug!("no route"),
            Err(err) => tracing::debug!(%err, "route search aborted"),
        }

        result
    }

    fn search(
        &mut self,
        start: usize,
        destination: usize,
        initial_budget: i64,
    ) -> GraphResult<SearchOutcome> {
        let graph = self.graph;
        let destination = graph.node(destination)?.index();
        let start_edges = graph.incident_edges(start)?;

        let mut stack = vec![Frame {
            node: start,
            entry_budget: initial_budget,
            edges: start_edges,
        }];
        self.visited.try_visit(start);
        let mut budget = initial_budget;

        if start == destination {
            return Ok(SearchOutcome::Found(route_from(&stack)));
        }

        while let Some(frame) = stack.last_mut() {
            debug_assert_eq!(budget, frame.entry_budget);

            let mut descent = None;
            for edge in frame.edges.by_ref() {
                let next = edge.to().index();
                if self.visited.is_visited(next) {
                    continue;
                }
                if let Some(next_budget) = self.tariff.charge(edge.kind(), budget) {
                    descent = Some((next, next_budget));
                    break;
                }
            }

            match descent {
                Some((next, next_budget)) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(from = frame.node, to = next, budget = next_budget, "descend");

                    let edges = graph.incident_edges(next)?;
                    self.visited.try_visit(next);
                    stack.push(Frame {
                        node: next,
                        entry_budget: next_budget,
                        edges,
                    });
                    budget = next_budget;

                    if next == destination {
                        return Ok(SearchOutcome::Found(route_from(&stack)));
                    }
                }
                None => {
                    let node = frame.node;
                    stack.pop();
                    self.visited.unvisit(node);
                    budget = stack.last().map_or(initial_budget, |parent| parent.entry_budget);

                    #[cfg(feature = "tracing")]
                    tracing::trace!(node, budget, "backtrack");
                }
            }
        }

        debug_assert_eq!(budget, initial_budget);
        Ok(SearchOutcome::NotFound)
    }
}

fn route_from(stack: &[Frame<'_>]) -> Route {
    Route {
        nodes: stack.iter().map(|f| Node::new(f.node)).collect(),
        budgets: stack.iter().map(|f| f.entry_budget).collect(),
    }
}
