//! # `tollroad` - Budget-Constrained Route Search
//!
//! Finds a route between two intersections of a grid-shaped road map when
//! some roads charge a toll and others pay a reward. The traveller carries a
//! budget; a toll or reward road may only be taken if the budget stays
//! non-negative afterwards, and public roads are always free.
//!
//! ## Architecture
//!
//! 1. **Graph** ([`RoadGraph`]): fixed node set, undirected kind-tagged edges,
//!    adjacency queries in ascending neighbour order. Topology never changes
//!    during a search and can be shared freely.
//! 2. **Search** ([`PathFinder`]): iterative depth-first search with an
//!    explicit frame stack. Every frame records the budget it was entered
//!    with, so backtracking restores the parent's budget exactly. Visitation marks live
//!    in a per-finder [`VisitedSet`], never in the graph.
//! 3. **Loading** ([`RoadMap`]): parser for the text map format.
//!
//! The search returns the *first* feasible route in its exploration order.
//! It does not look for the shortest or the cheapest one.
//!
//! ## Example
//!
//! ```rust
//! use tollroad::{EdgeKind, PathFinder, RoadGraph, SearchOutcome, Tariff};
//!
//! let mut graph = RoadGraph::new(3);
//! graph.insert_edge(0, 1, EdgeKind::Toll).unwrap();
//! graph.insert_edge(1, 2, EdgeKind::Public).unwrap();
//!
//! let mut finder = PathFinder::new(&graph, Tariff::new(5, 0));
//!
//! assert_eq!(finder.find_path(0, 2, 3).unwrap(), SearchOutcome::NotFound);
//!
//! let route = finder.find_path(0, 2, 5).unwrap().into_route().unwrap();
//! assert_eq!(route.indices(), vec![0, 1, 2]);
//! assert_eq!(route.final_budget(), 0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod map;
pub mod search;

pub use error::{GraphError, GraphResult, MapError};
pub use graph::{Edge, EdgeKind, Node, RoadGraph, VisitedSet};
pub use map::RoadMap;
pub use search::{find_paths, PathFinder, Route, SearchOutcome, Tariff, Trip};
