//! Fractional knapsack via greedy selection by value density.

use crate::instance::KnapsackInstance;

/// Share of one item packed by the greedy pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ItemFraction {
    /// Original index of the item.
    pub(crate) index: usize,
    /// Portion taken, in `[0, 1]`.
    pub(crate) ratio: f64,
}

/// Outcome of the greedy pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FractionalSelection {
    /// Fractions in the order the items were considered.
    pub(crate) fractions: Vec<ItemFraction>,
    /// Total value packed.
    pub(crate) value: f64,
    /// Total weight packed.
    pub(crate) weight: f64,
}

/// Pack items by decreasing value/weight ratio, splitting the first item that
/// does not fit whole and stopping there.
///
/// The sort is stable, so items with equal ratios keep caller order.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the fractional relaxation accumulates real-valued totals"
)]
pub(crate) fn solve(instance: &KnapsackInstance) -> FractionalSelection {
    let mut order: Vec<_> = instance.items().iter().enumerate().collect();
    order.sort_by(|(_, lhs), (_, rhs)| rhs.cmp_ratio(lhs));

    let mut selection = FractionalSelection::default();
    let mut remaining = instance.capacity();
    for (index, item) in order {
        let weight = item.weight.get();
        if weight <= remaining {
            selection.fractions.push(ItemFraction { index, ratio: 1.0 });
            selection.value += item.value as f64;
            selection.weight += weight as f64;
            remaining -= weight;
        } else {
            let ratio = remaining as f64 / weight as f64;
            selection.fractions.push(ItemFraction { index, ratio });
            selection.value += item.value as f64 * ratio;
            selection.weight += remaining as f64;
            break;
        }
    }
    selection
}
