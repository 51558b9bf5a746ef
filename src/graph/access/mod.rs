//! Search-scoped state kept apart from graph topology.
//!
//! The road graph is immutable once built; anything a traversal needs to
//! mutate (visited marks) lives here and is owned by that traversal.

pub mod visited;

pub use visited::VisitedSet;
