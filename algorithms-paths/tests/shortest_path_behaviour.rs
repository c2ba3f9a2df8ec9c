#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for `ShortestPathSolver` using rstest-bdd.

use std::cell::RefCell;

use algorithms_core::{ValidationError, run};
use algorithms_paths::{ShortestPathRequest, ShortestPathResult, ShortestPathSolver};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct PathWorld {
    request: RefCell<ShortestPathRequest>,
    outcome: RefCell<Option<Result<ShortestPathResult, ValidationError>>>,
}

impl PathWorld {
    fn expect_outcome(&self) -> Result<ShortestPathResult, ValidationError> {
        self.outcome
            .borrow()
            .clone()
            .expect("outcome should be recorded before assertions")
    }
}

#[fixture]
fn world() -> PathWorld {
    PathWorld::default()
}

fn parse_list<T: std::str::FromStr>(raw: &str, separator: char) -> Vec<T> {
    raw.trim_matches('"')
        .split(separator)
        .map(|part| {
            part.parse()
                .ok()
                .expect("list entries are integers")
        })
        .collect()
}

fn parse_edge(raw: &str) -> [i64; 3] {
    let parts: Vec<i64> = parse_list(raw, ':');
    parts.try_into().expect("edges are from:to:weight")
}

#[given("a graph with {n} nodes and edges {edges:word}")]
fn given_graph(world: &PathWorld, n: usize, edges: String) {
    let mut request = world.request.borrow_mut();
    request.n = n;
    request.edges = edges.trim_matches('"').split(',').map(parse_edge).collect();
}

#[given("the source node {source}")]
fn given_source(world: &PathWorld, source: i64) {
    world.request.borrow_mut().source = source;
}

#[when("the shortest path solver runs")]
fn when_solver_runs(world: &PathWorld) {
    let request = world.request.borrow().clone();
    world
        .outcome
        .replace(Some(run::<ShortestPathSolver>(&request)));
}

#[then("the distances are {distances:word}")]
fn then_distances(world: &PathWorld, distances: String) {
    let result = world.expect_outcome().expect("expected solve success");
    assert_eq!(result.distances(), parse_list::<i64>(&distances, ','));
}

#[then("the path to node {node} is {path:word}")]
fn then_path(world: &PathWorld, node: usize, path: String) {
    let result = world.expect_outcome().expect("expected solve success");
    let route = result.solution.get(node).expect("node exists");
    assert_eq!(route.path, parse_list::<usize>(&path, ','));
}

#[then("node {node} is unreachable")]
fn then_unreachable(world: &PathWorld, node: usize) {
    let result = world.expect_outcome().expect("expected solve success");
    let route = result.solution.get(node).expect("node exists");
    assert!(!route.reachable);
    assert!(route.path.is_empty());
}

#[then("the request is rejected with a negative weight")]
fn then_negative_weight(world: &PathWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected validation failure");
    assert!(matches!(err, ValidationError::NegativeEdgeWeight { .. }));
}

#[then("the request is rejected with an out of bounds source")]
fn then_source_out_of_bounds(world: &PathWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected validation failure");
    assert!(matches!(err, ValidationError::SourceOutOfBounds { .. }));
}

#[scenario(path = "tests/features/shortest_path.feature", index = 0)]
fn all_reachable(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 1)]
fn partly_unreachable(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 2)]
fn negative_weight(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 3)]
fn source_out_of_bounds(world: PathWorld) {
    let _ = world;
}
