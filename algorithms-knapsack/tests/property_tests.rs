#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the knapsack engine.
//!
//! # Invariants tested
//!
//! - **Optimality:** the 0/1 value matches exhaustive search on small inputs.
//! - **Feasibility:** neither selection exceeds the capacity.
//! - **Relaxation:** the fractional value is never below the 0/1 value.
//! - **Single split:** at most one fractional item has a ratio below one.
//! - **Idempotence:** solving twice yields the same result.

use algorithms_core::{Solver, run};
use algorithms_knapsack::{KnapsackRequest, KnapsackSolver};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn request_strategy() -> impl Strategy<Value = KnapsackRequest> {
    (0_usize..=10)
        .prop_flat_map(|len| {
            (
                proptest::collection::vec(0_usize..=50, len),
                proptest::collection::vec(1_usize..=30, len),
                0_usize..=80,
            )
        })
        .prop_map(|(values, weights, capacity)| KnapsackRequest {
            values,
            weights,
            capacity,
        })
}

/// Best 0/1 value by enumerating every subset.
fn brute_force(request: &KnapsackRequest) -> usize {
    let len = request.values.len();
    (0_u32..(1 << len))
        .filter_map(|mask| {
            let (value, weight) = request
                .values
                .iter()
                .zip(&request.weights)
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .fold((0, 0), |(value, weight), (_, (v, w))| (value + v, weight + w));
            (weight <= request.capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the dynamic program is optimal.
    #[test]
    fn binary_value_is_optimal(request in request_strategy()) {
        let result = run::<KnapsackSolver>(&request).expect("valid request");
        prop_assert_eq!(result.binary_solution.max_value, brute_force(&request));
    }

    /// Property: reported items add up to the reported totals and fit.
    #[test]
    fn binary_selection_is_feasible(request in request_strategy()) {
        let result = run::<KnapsackSolver>(&request).expect("valid request");
        let binary = &result.binary_solution;
        let weight: usize = binary.selected_items.iter().map(|item| item.weight).sum();
        let value: usize = binary.selected_items.iter().map(|item| item.value).sum();
        prop_assert_eq!(weight, binary.max_weight);
        prop_assert_eq!(value, binary.max_value);
        prop_assert!(binary.max_weight <= request.capacity);
        prop_assert!(
            binary.selected_items.windows(2).all(|pair| pair[0].number < pair[1].number)
        );
    }

    /// Property: the fractional relaxation bounds the 0/1 optimum from above.
    #[test]
    fn fractional_bounds_binary(request in request_strategy()) {
        let result = run::<KnapsackSolver>(&request).expect("valid request");
        let binary = result.binary_solution.max_value as f64;
        prop_assert!(result.fractional_solution.max_value + TOLERANCE >= binary);
        prop_assert!(
            result.fractional_solution.max_weight <= request.capacity as f64 + TOLERANCE
        );
    }

    /// Property: the greedy pass splits at most one item.
    #[test]
    fn at_most_one_split_item(request in request_strategy()) {
        let result = run::<KnapsackSolver>(&request).expect("valid request");
        let split = result
            .fractional_solution
            .selected_items
            .iter()
            .filter(|item| item.ratio < 1.0)
            .count();
        prop_assert!(split <= 1);
    }

    /// Property: solving is idempotent.
    #[test]
    fn solving_is_idempotent(request in request_strategy()) {
        let mut solver = KnapsackSolver::initialize(&request).expect("valid request");
        solver.solve();
        let first = solver.format_result();
        solver.solve();
        prop_assert_eq!(first, solver.format_result());
    }
}
