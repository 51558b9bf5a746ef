use std::collections::HashSet;

use proptest::prelude::*;
use tollroad::{EdgeKind, PathFinder, RoadGraph, SearchOutcome, Tariff};

#[derive(Debug, Clone)]
struct Case {
    node_count: usize,
    roads: Vec<(usize, usize, EdgeKind)>,
    start: usize,
    destination: usize,
    budget: i64,
    tariff: Tariff,
}

impl Case {
    fn graph(&self) -> RoadGraph {
        let mut g = RoadGraph::new(self.node_count);
        for &(u, v, kind) in &self.roads {
            // Duplicates are expected from the generator; the first one wins.
            let _ = g.insert_edge(u, v, kind);
        }
        g
    }
}

fn arb_kind() -> impl Strategy<Value = EdgeKind> {
    prop_oneof![
        Just(EdgeKind::Public),
        Just(EdgeKind::Toll),
        Just(EdgeKind::Reward),
    ]
}

fn arb_case() -> impl Strategy<Value = Case> {
    (2usize..9).prop_flat_map(|n| {
        (
            proptest::collection::vec(
                (0..n, 1..n, arb_kind()).prop_map(move |(u, offset, kind)| (u, (u + offset) % n, kind)),
                0..n * 3,
            ),
            0..n,
            0..n,
            -2i64..8,
            0i64..5,
            -2i64..5,
        )
            .prop_map(move |(roads, start, destination, budget, toll, reward)| Case {
                node_count: n,
                roads,
                start,
                destination,
                budget,
                tariff: Tariff::new(toll, reward),
            })
    })
}

/// Plain recursive backtracking search, used as an oracle for the frame-based one.
fn reference(g: &RoadGraph, tariff: Tariff, start: usize, destination: usize, budget: i64) -> Option<Vec<usize>> {
    fn go(
        g: &RoadGraph,
        tariff: Tariff,
        node: usize,
        destination: usize,
        budget: i64,
        on_path: &mut Vec<bool>,
        path: &mut Vec<usize>,
    ) -> bool {
        on_path[node] = true;
        path.push(node);
        if node == destination {
            return true;
        }
        for edge in g.incident_edges(node).unwrap() {
            let next = edge.to().index();
            if on_path[next] {
                continue;
            }
            if let Some(next_budget) = tariff.charge(edge.kind(), budget) {
                if go(g, tariff, next, destination, next_budget, on_path, path) {
                    return true;
                }
            }
        }
        on_path[node] = false;
        path.pop();
        false
    }

    let mut on_path = vec![false; g.node_count()];
    let mut path = Vec::new();
    go(g, tariff, start, destination, budget, &mut on_path, &mut path).then_some(path)
}

proptest! {
    #[test]
    fn matches_recursive_reference(case in arb_case()) {
        let g = case.graph();
        let mut finder = PathFinder::new(&g, case.tariff);
        let outcome = finder.find_path(case.start, case.destination, case.budget).unwrap();
        let expected = reference(&g, case.tariff, case.start, case.destination, case.budget);
        prop_assert_eq!(outcome.route().map(|r| r.indices()), expected);
    }

    #[test]
    fn found_routes_are_simple_connected_and_solvent(case in arb_case()) {
        let g = case.graph();
        let mut finder = PathFinder::new(&g, case.tariff);
        let outcome = finder.find_path(case.start, case.destination, case.budget).unwrap();

        if let SearchOutcome::Found(route) = outcome {
            let nodes = route.indices();
            prop_assert_eq!(nodes.first().copied(), Some(case.start));
            prop_assert_eq!(nodes.last().copied(), Some(case.destination));

            let unique: HashSet<_> = nodes.iter().collect();
            prop_assert_eq!(unique.len(), nodes.len());

            let budgets = route.budgets();
            prop_assert_eq!(budgets[0], case.budget);
            for (i, pair) in nodes.windows(2).enumerate() {
                prop_assert!(g.are_adjacent(pair[0], pair[1]).unwrap());
                let kind = g.edge_between(pair[0], pair[1]).unwrap().kind();
                prop_assert_eq!(budgets[i + 1], budgets[i] + case.tariff.delta(kind));
                if kind != EdgeKind::Public {
                    prop_assert!(budgets[i + 1] >= 0);
                }
            }

            // Marks after success are exactly the route.
            let marked: Vec<usize> = finder.visited().iter().collect();
            let mut sorted = nodes.clone();
            sorted.sort_unstable();
            prop_assert_eq!(marked, sorted);
        } else {
            prop_assert_eq!(finder.visited().count(), 0);
        }
    }

    #[test]
    fn repeated_searches_agree(case in arb_case()) {
        let g = case.graph();
        let mut finder = PathFinder::new(&g, case.tariff);
        let first = finder.find_path(case.start, case.destination, case.budget).unwrap();
        let second = finder.find_path(case.start, case.destination, case.budget).unwrap();
        let fresh = PathFinder::new(&g, case.tariff)
            .find_path(case.start, case.destination, case.budget)
            .unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
    }

    #[test]
    fn insert_edge_symmetry(case in arb_case()) {
        let g = case.graph();
        for &(u, v, _) in &case.roads {
            prop_assert!(g.are_adjacent(u, v).unwrap());
            prop_assert!(g.are_adjacent(v, u).unwrap());
            prop_assert_eq!(
                g.edge_between(u, v).unwrap().kind(),
                g.edge_between(v, u).unwrap().kind()
            );
        }
    }
}
