#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the shortest-path engine.
//!
//! # Invariants tested
//!
//! - **Optimality:** distances match Bellman-Ford on the same graph.
//! - **Path shape:** every reachable path starts at the source, ends at its
//!   node, follows existing edges, and sums to the reported distance.
//! - **Unreachable nodes:** report `-1` and an empty path.
//! - **Idempotence:** solving twice yields the same result.

use algorithms_core::{Solver, run};
use algorithms_paths::{ShortestPathRequest, ShortestPathSolver};
use proptest::prelude::*;

fn request_strategy() -> impl Strategy<Value = ShortestPathRequest> {
    (1_i64..=12).prop_flat_map(|n| {
        (
            proptest::collection::vec((0..n, 0..n, 0_i64..=40), 0..=40),
            0..n,
        )
            .prop_map(move |(edges, source)| ShortestPathRequest {
                n: usize::try_from(n).expect("small graph"),
                edges: edges
                    .into_iter()
                    .map(|(from, to, weight)| [from, to, weight])
                    .collect(),
                source,
            })
    })
}

/// Distances by repeated relaxation of every edge.
fn bellman_ford(request: &ShortestPathRequest) -> Vec<i64> {
    let index = |value: i64| usize::try_from(value).expect("validated node");
    let mut distances = vec![None; request.n];
    if let Some(slot) = distances.get_mut(index(request.source)) {
        *slot = Some(0_i64);
    }
    for _ in 0..request.n {
        for &[from, to, weight] in &request.edges {
            let Some(base) = distances.get(index(from)).copied().flatten() else {
                continue;
            };
            let candidate = base + weight;
            if let Some(slot) = distances.get_mut(index(to)) {
                if slot.is_none_or(|current| candidate < current) {
                    *slot = Some(candidate);
                }
            }
        }
    }
    distances
        .into_iter()
        .map(|distance| distance.unwrap_or(-1))
        .collect()
}

fn edge_weight(request: &ShortestPathRequest, from: usize, to: usize) -> Option<i64> {
    request
        .edges
        .iter()
        .filter(|edge| {
            usize::try_from(edge[0]).ok() == Some(from) && usize::try_from(edge[1]).ok() == Some(to)
        })
        .map(|edge| edge[2])
        .min()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: Dijkstra agrees with Bellman-Ford.
    #[test]
    fn distances_match_bellman_ford(request in request_strategy()) {
        let result = run::<ShortestPathSolver>(&request).expect("valid request");
        prop_assert_eq!(result.distances(), bellman_ford(&request));
    }

    /// Property: reported paths are real routes whose cost is the distance.
    #[test]
    fn paths_are_consistent(request in request_strategy()) {
        let result = run::<ShortestPathSolver>(&request).expect("valid request");
        let source = usize::try_from(request.source).expect("validated source");
        for route in &result.solution {
            if !route.reachable {
                prop_assert_eq!(route.distance, -1);
                prop_assert!(route.path.is_empty());
                continue;
            }
            prop_assert_eq!(route.path.first().copied(), Some(source));
            prop_assert_eq!(route.path.last().copied(), Some(route.node));
            let mut cost = 0;
            for pair in route.path.windows(2) {
                let weight = edge_weight(&request, pair[0], pair[1]);
                prop_assert!(weight.is_some());
                cost += weight.unwrap_or_default();
            }
            prop_assert_eq!(cost, route.distance);
        }
    }

    /// Property: solving is idempotent.
    #[test]
    fn solving_is_idempotent(request in request_strategy()) {
        let mut solver = ShortestPathSolver::initialize(&request).expect("valid request");
        solver.solve();
        let first = solver.format_result();
        solver.solve();
        prop_assert_eq!(first, solver.format_result());
    }
}
