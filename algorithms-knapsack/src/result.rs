//! Result values reported for a solved knapsack.

use serde::{Deserialize, Serialize};

/// An item packed into one of the solutions.
///
/// `value` and `weight` are the amounts actually contributed, so a fractional
/// item reports its scaled value and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem<T> {
    /// Original item index.
    pub number: usize,
    /// Value contributed.
    pub value: T,
    /// Weight contributed.
    pub weight: T,
    /// Portion of the item taken; `1.0` for whole items.
    pub ratio: f64,
}

/// One variant's solution: totals and the items that produced them.
///
/// The binary solution uses `usize` amounts and the fractional solution uses
/// `f64` amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackSolution<T> {
    /// Total value packed.
    pub max_value: T,
    /// Total weight packed.
    pub max_weight: T,
    /// Packed items in ascending index order.
    pub selected_items: Vec<SelectedItem<T>>,
}

impl<T> KnapsackSolution<T> {
    /// Whether any item was packed.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !self.selected_items.is_empty()
    }
}

/// Which variants produced a non-empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnapsackStatus {
    /// Both variants packed at least one item.
    BothFound,
    /// Only the 0/1 variant packed an item.
    BinaryOnly,
    /// Only the fractional variant packed an item.
    FractionalOnly,
    /// Nothing fits.
    NoSolution,
}

impl KnapsackStatus {
    /// Classify a pair of solutions.
    #[must_use]
    pub const fn from_found(binary: bool, fractional: bool) -> Self {
        match (binary, fractional) {
            (true, true) => Self::BothFound,
            (true, false) => Self::BinaryOnly,
            (false, true) => Self::FractionalOnly,
            (false, false) => Self::NoSolution,
        }
    }

    /// Human-readable summary.
    ///
    /// # Examples
    /// ```
    /// use algorithms_knapsack::KnapsackStatus;
    ///
    /// assert_eq!(KnapsackStatus::NoSolution.message(), "No solution");
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BothFound => "Binary & Fractional solution found",
            Self::BinaryOnly => "Only Binary solution found",
            Self::FractionalOnly => "Only Fractional solution found",
            Self::NoSolution => "No solution",
        }
    }
}

impl std::fmt::Display for KnapsackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Both knapsack solutions plus a text rendering of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackResult {
    /// Summary matching [`KnapsackResult::status`].
    pub message: String,
    /// Which variants found a selection.
    pub status: KnapsackStatus,
    /// Capacity the solutions were packed against.
    pub capacity: usize,
    /// Whole-item solution.
    pub binary_solution: KnapsackSolution<usize>,
    /// Relaxed solution allowing a split item.
    pub fractional_solution: KnapsackSolution<f64>,
    /// Text rendering of both solutions.
    pub formatted_output: String,
}

impl KnapsackResult {
    /// Assemble a result, deriving the status and text rendering.
    #[must_use]
    pub fn new(
        capacity: usize,
        binary_solution: KnapsackSolution<usize>,
        fractional_solution: KnapsackSolution<f64>,
    ) -> Self {
        let status =
            KnapsackStatus::from_found(binary_solution.is_found(), fractional_solution.is_found());
        let formatted_output = render(capacity, &binary_solution, &fractional_solution);
        Self {
            message: status.message().to_owned(),
            status,
            capacity,
            binary_solution,
            fractional_solution,
            formatted_output,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "percentages are rendered from the fractional ratio"
)]
fn render(
    capacity: usize,
    binary: &KnapsackSolution<usize>,
    fractional: &KnapsackSolution<f64>,
) -> String {
    let mut blocks = Vec::new();

    if binary.is_found() {
        let mut lines = vec!["Binary version:".to_owned()];
        lines.extend(binary.selected_items.iter().map(|item| {
            format!(
                "Item {}: Value = {}, Weight = {}",
                item.number, item.value, item.weight
            )
        }));
        lines.push(format!("-> Total value: {}", binary.max_value));
        lines.push(format!(
            "-> Total weight: {} (out of {capacity})",
            binary.max_weight
        ));
        blocks.push(lines.join("\n"));
    }

    if fractional.is_found() {
        let mut lines = vec!["Fractional version:".to_owned()];
        lines.extend(fractional.selected_items.iter().map(|item| {
            let whole = format!(
                "Item {}: Value = {:.2}, Weight = {:.2}",
                item.number, item.value, item.weight
            );
            if item.ratio < 1.0 {
                format!("{whole} ({:.2}% of whole item)", item.ratio * 100.0)
            } else {
                whole
            }
        }));
        lines.push(format!("-> Total value: {:.2}", fractional.max_value));
        lines.push(format!(
            "-> Total weight: {:.2} (out of {capacity})",
            fractional.max_weight
        ));
        blocks.push(lines.join("\n"));
    }

    if blocks.is_empty() {
        return String::new();
    }
    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}
