//! 0/1 knapsack via a bounded-capacity dynamic program.

use crate::instance::KnapsackInstance;

/// Items chosen whole by the dynamic program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BinarySelection {
    /// Selected item indices in ascending order.
    pub(crate) selected: Vec<usize>,
    /// Optimal total value.
    pub(crate) value: usize,
    /// Total weight of the selected items.
    pub(crate) weight: usize,
}

/// Best value per `(items considered, capacity used)` pair.
struct ValueTable {
    width: usize,
    cells: Vec<usize>,
}

#[expect(
    clippy::indexing_slicing,
    reason = "cell coordinates are bounded by the table dimensions fixed at construction"
)]
impl ValueTable {
    fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![0; rows * width],
        }
    }

    fn get(&self, row: usize, column: usize) -> usize {
        self.cells[row * self.width + column]
    }

    fn set(&mut self, row: usize, column: usize, value: usize) {
        self.cells[row * self.width + column] = value;
    }
}

/// Fill the `(n + 1) × (capacity + 1)` table and walk it back to the chosen items.
///
/// Runs in `O(n · capacity)` time and space.
pub(crate) fn solve(instance: &KnapsackInstance) -> BinarySelection {
    let items = instance.items();
    let capacity = instance.capacity();
    let mut table = ValueTable::new(items.len() + 1, capacity + 1);

    for (row, item) in (1..).zip(items) {
        let weight = item.weight.get();
        for column in 0..=capacity {
            let exclude = table.get(row - 1, column);
            let best = if weight > column {
                exclude
            } else {
                let include = item
                    .value
                    .saturating_add(table.get(row - 1, column - weight));
                exclude.max(include)
            };
            table.set(row, column, best);
        }
    }

    let optimum = table.get(items.len(), capacity);
    let mut selection = BinarySelection {
        value: optimum,
        ..BinarySelection::default()
    };
    let mut remaining_value = optimum;
    let mut remaining_capacity = capacity;
    for (row, item) in (1..=items.len()).rev().zip(items.iter().rev()) {
        if remaining_value == 0 {
            break;
        }
        if table.get(row, remaining_capacity) != table.get(row - 1, remaining_capacity) {
            let weight = item.weight.get();
            selection.selected.push(row - 1);
            selection.weight += weight;
            remaining_value = remaining_value.saturating_sub(item.value);
            remaining_capacity -= weight;
        }
    }
    selection.selected.reverse();
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn instance(values: &[usize], weights: &[usize], capacity: usize) -> KnapsackInstance {
        KnapsackInstance::new(values, weights, capacity).expect("valid instance")
    }

    #[rstest]
    #[case(&[19, 4, 1, 16, 16], &[32, 37, 24, 49, 27], 87, &[0, 2, 4], 36, 83)]
    #[case(&[17, 9, 14, 15, 3], &[41, 36, 24, 15, 35], 31, &[3], 15, 15)]
    #[case(&[60, 100, 120], &[10, 20, 30], 50, &[1, 2], 220, 50)]
    #[case(&[10, 5], &[2, 3], 100, &[0, 1], 15, 5)]
    fn finds_optimal_selection(
        #[case] values: &[usize],
        #[case] weights: &[usize],
        #[case] capacity: usize,
        #[case] selected: &[usize],
        #[case] value: usize,
        #[case] weight: usize,
    ) {
        let selection = solve(&instance(values, weights, capacity));
        assert_eq!(selection.selected, selected);
        assert_eq!(selection.value, value);
        assert_eq!(selection.weight, weight);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn nothing_fits(#[case] capacity: usize) {
        let selection = solve(&instance(&[1, 2], &[5, 6], capacity));
        assert_eq!(selection, BinarySelection::default());
    }

    #[rstest]
    fn zero_value_items_are_never_selected() {
        let selection = solve(&instance(&[0, 0], &[1, 1], 2));
        assert!(selection.selected.is_empty());
        assert_eq!(selection.weight, 0);
    }
}
