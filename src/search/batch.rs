//! Many independent trips over one shared graph.
//!
//! Topology is shared read-only; every search gets its own visitation
//! overlay, so trips never observe each other's marks. With the `parallel`
//! feature the trips are spread over rayon's pool.

use crate::error::GraphResult;
use crate::graph::RoadGraph;

use super::{PathFinder, SearchOutcome, Tariff, Trip};

/// Runs every trip against `graph`, returning outcomes in input order.
///
/// A trip whose endpoints are invalid yields its own `Err` without
/// affecting the others.
#[cfg(feature = "parallel")]
pub fn find_paths(graph: &RoadGraph, tariff: Tariff, trips: &[Trip]) -> Vec<GraphResult<SearchOutcome>> {
    use rayon::prelude::*;

    trips
        .par_iter()
        .map_init(|| PathFinder::new(graph, tariff), |finder, trip| finder.find_trip(trip))
        .collect()
}

/// Runs every trip against `graph`, returning outcomes in input order.
///
/// A trip whose endpoints are invalid yields its own `Err` without
/// affecting the others.
#[cfg(not(feature = "parallel"))]
pub fn find_paths(graph: &RoadGraph, tariff: Tariff, trips: &[Trip]) -> Vec<GraphResult<SearchOutcome>> {
    let mut finder = PathFinder::new(graph, tariff);
    trips.iter().map(|trip| finder.find_trip(trip)).collect()
}
