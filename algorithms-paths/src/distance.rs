//! Tentative distances and predecessor links maintained by the search.

/// Best known distance and predecessor per node.
///
/// `None` distance means the node has not been reached yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    distances: Vec<Option<i64>>,
    predecessors: Vec<Option<usize>>,
}

impl DistanceTable {
    /// A table where only `source` is reached, at distance zero.
    #[must_use]
    pub fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![None; node_count];
        if let Some(slot) = distances.get_mut(source) {
            *slot = Some(0);
        }
        Self {
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// Best known distance to `node`.
    #[must_use]
    pub fn distance(&self, node: usize) -> Option<i64> {
        self.distances.get(node).copied().flatten()
    }

    /// Node preceding `node` on its best known path.
    #[must_use]
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Record `distance` to `node` via `via` if it strictly improves on the
    /// current value. Returns whether the table changed.
    pub fn relax(&mut self, via: usize, node: usize, distance: i64) -> bool {
        let (Some(slot), Some(link)) = (self.distances.get_mut(node), self.predecessors.get_mut(node))
        else {
            return false;
        };
        if slot.is_some_and(|current| current <= distance) {
            return false;
        }
        *slot = Some(distance);
        *link = Some(via);
        true
    }

    /// Path from the source to `node` following predecessor links; empty when
    /// `node` is unreachable.
    #[must_use]
    pub fn path_to(&self, node: usize) -> Vec<usize> {
        if self.distance(node).is_none() {
            return Vec::new();
        }
        let mut path: Vec<_> =
            std::iter::successors(Some(node), |&current| self.predecessor(current))
                .take(self.distances.len())
                .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn starts_with_only_the_source_reached() {
        let table = DistanceTable::new(3, 1);
        assert_eq!(table.distance(0), None);
        assert_eq!(table.distance(1), Some(0));
        assert_eq!(table.path_to(1), vec![1]);
        assert!(table.path_to(2).is_empty());
    }

    #[rstest]
    fn relaxes_only_on_strict_improvement() {
        let mut table = DistanceTable::new(3, 0);
        assert!(table.relax(0, 1, 5));
        assert!(!table.relax(2, 1, 5));
        assert!(table.relax(2, 1, 4));
        assert_eq!(table.predecessor(1), Some(2));
        assert!(!table.relax(0, 9, 1));
    }

    #[rstest]
    fn follows_predecessors_back_to_the_source() {
        let mut table = DistanceTable::new(4, 0);
        table.relax(0, 1, 2);
        table.relax(1, 3, 5);
        assert_eq!(table.path_to(3), vec![0, 1, 3]);
    }
}
