//! Road graph data model.
//!
//! - `node`: vertex identity
//! - `edge`: road kinds and directed edge records
//! - `road_graph`: the undirected graph and its adjacency queries
//! - `access`: search-scoped state (visited sets) kept out of the topology

pub mod access;
pub mod edge;
pub mod node;
pub mod road_graph;

pub use access::VisitedSet;
pub use edge::{Edge, EdgeKind};
pub use node::Node;
pub use road_graph::{IncidentEdges, RoadGraph};
