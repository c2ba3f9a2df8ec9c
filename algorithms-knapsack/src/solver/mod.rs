//! [`KnapsackSolver`]: both knapsack variants behind the shared lifecycle.

use algorithms_core::{Solver, ValidationError};

use crate::binary::{self, BinarySelection};
use crate::fractional::{self, FractionalSelection};
use crate::instance::{KnapsackInstance, KnapsackRequest};
use crate::result::{KnapsackResult, KnapsackSolution, SelectedItem};

/// Solves the 0/1 and fractional knapsack for one validated instance.
///
/// # Examples
/// ```rust
/// use algorithms_core::run;
/// use algorithms_knapsack::{KnapsackRequest, KnapsackSolver, KnapsackStatus};
///
/// let request = KnapsackRequest {
///     values: vec![60, 100, 120],
///     weights: vec![10, 20, 30],
///     capacity: 50,
/// };
/// let result = run::<KnapsackSolver>(&request).unwrap();
/// assert_eq!(result.status, KnapsackStatus::BothFound);
/// assert_eq!(result.binary_solution.max_value, 220);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    instance: KnapsackInstance,
    binary: BinarySelection,
    fractional: FractionalSelection,
}

impl KnapsackSolver {
    /// Build a solver for an already validated instance.
    #[must_use]
    pub fn new(instance: KnapsackInstance) -> Self {
        Self {
            instance,
            binary: BinarySelection::default(),
            fractional: FractionalSelection::default(),
        }
    }

    /// The instance being solved.
    #[must_use]
    pub const fn instance(&self) -> &KnapsackInstance {
        &self.instance
    }

    fn binary_solution(&self) -> KnapsackSolution<usize> {
        let selected_items = self
            .binary
            .selected
            .iter()
            .filter_map(|&number| {
                self.instance.items().get(number).map(|item| SelectedItem {
                    number,
                    value: item.value,
                    weight: item.weight.get(),
                    ratio: 1.0,
                })
            })
            .collect();
        KnapsackSolution {
            max_value: self.binary.value,
            max_weight: self.binary.weight,
            selected_items,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "fractional items report scaled real-valued amounts"
    )]
    fn fractional_solution(&self) -> KnapsackSolution<f64> {
        let mut selected_items: Vec<_> = self
            .fractional
            .fractions
            .iter()
            .filter(|fraction| fraction.ratio > 0.0)
            .filter_map(|fraction| {
                self.instance
                    .items()
                    .get(fraction.index)
                    .map(|item| SelectedItem {
                        number: fraction.index,
                        value: item.value as f64 * fraction.ratio,
                        weight: item.weight.get() as f64 * fraction.ratio,
                        ratio: fraction.ratio,
                    })
            })
            .collect();
        selected_items.sort_by_key(|item| item.number);
        KnapsackSolution {
            max_value: self.fractional.value,
            max_weight: self.fractional.weight,
            selected_items,
        }
    }
}

impl Solver for KnapsackSolver {
    type Request = KnapsackRequest;
    type Solution = KnapsackResult;

    fn initialize(request: &KnapsackRequest) -> Result<Self, ValidationError> {
        let instance = KnapsackInstance::try_from(request)?;
        log::debug!(
            "knapsack initialised with {} items and capacity {}",
            instance.items().len(),
            instance.capacity()
        );
        Ok(Self::new(instance))
    }

    fn solve(&mut self) {
        self.binary = binary::solve(&self.instance);
        self.fractional = fractional::solve(&self.instance);
        log::debug!(
            "knapsack solved: binary value {} from {} items, fractional value {:.2}",
            self.binary.value,
            self.binary.selected.len(),
            self.fractional.value
        );
    }

    fn format_result(&self) -> KnapsackResult {
        KnapsackResult::new(
            self.instance.capacity(),
            self.binary_solution(),
            self.fractional_solution(),
        )
    }
}
