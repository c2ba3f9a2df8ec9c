//! Knapsack items and validated problem instances.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use algorithms_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters for a knapsack request.
///
/// `values[i]` and `weights[i]` describe item `i`; the index is the item's
/// identity in every result.
///
/// # Examples
/// ```rust
/// use algorithms_knapsack::KnapsackRequest;
///
/// let request: KnapsackRequest =
///     serde_json::from_str(r#"{"values":[3,4],"weights":[2,5],"capacity":6}"#).unwrap();
/// assert_eq!(request.values, vec![3, 4]);
/// assert_eq!(request.capacity, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnapsackRequest {
    /// Value of each item.
    pub values: Vec<usize>,
    /// Weight of each item; every weight must be positive.
    pub weights: Vec<usize>,
    /// Maximum total weight the knapsack holds.
    pub capacity: usize,
}

/// An item that may be packed into the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    /// Value gained by packing the whole item.
    pub value: usize,
    /// Weight of the whole item.
    pub weight: NonZeroUsize,
}

impl Item {
    /// Compare value-to-weight ratios without rounding.
    ///
    /// Ratios are compared by cross-multiplication in 128-bit arithmetic, so
    /// equal ratios compare equal even when their floating-point quotients
    /// would differ in the last bit.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use std::num::NonZeroUsize;
    /// use algorithms_knapsack::Item;
    ///
    /// let dense = Item { value: 6, weight: NonZeroUsize::MIN.saturating_add(1) };
    /// let sparse = Item { value: 9, weight: NonZeroUsize::MIN.saturating_add(5) };
    /// assert_eq!(dense.cmp_ratio(&sparse), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn cmp_ratio(&self, other: &Self) -> Ordering {
        let lhs = widen(self.value) * widen(other.weight.get());
        let rhs = widen(other.value) * widen(self.weight.get());
        lhs.cmp(&rhs)
    }
}

fn widen(value: usize) -> u128 {
    u128::try_from(value).unwrap_or(u128::MAX)
}

/// A validated knapsack: a capacity and an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackInstance {
    capacity: usize,
    items: Vec<Item>,
}

impl KnapsackInstance {
    /// Validate raw values and weights into an instance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LengthMismatch`] when the arrays differ in
    /// length, then [`ValidationError::ZeroWeight`] for the first item with a
    /// weight of zero.
    ///
    /// # Examples
    /// ```
    /// use algorithms_core::ValidationError;
    /// use algorithms_knapsack::KnapsackInstance;
    ///
    /// let instance = KnapsackInstance::new(&[10, 20], &[1, 2], 3).unwrap();
    /// assert_eq!(instance.items().len(), 2);
    ///
    /// let err = KnapsackInstance::new(&[10], &[0], 3).unwrap_err();
    /// assert_eq!(err, ValidationError::ZeroWeight { index: 0 });
    /// ```
    pub fn new(
        values: &[usize],
        weights: &[usize],
        capacity: usize,
    ) -> Result<Self, ValidationError> {
        if values.len() != weights.len() {
            return Err(ValidationError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let items = values
            .iter()
            .zip(weights)
            .enumerate()
            .map(|(index, (&value, &raw_weight))| {
                NonZeroUsize::new(raw_weight)
                    .map(|weight| Item { value, weight })
                    .ok_or(ValidationError::ZeroWeight { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { capacity, items })
    }

    /// Maximum total weight.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items in caller order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl TryFrom<&KnapsackRequest> for KnapsackInstance {
    type Error = ValidationError;

    fn try_from(request: &KnapsackRequest) -> Result<Self, Self::Error> {
        Self::new(&request.values, &request.weights, request.capacity)
    }
}
