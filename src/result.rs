//! Partitioning results.

/// A partition: `k` parts, each an ordered list of values or of positions
/// into the input (see [`PartitionConfig::return_indices`]).
///
/// [`PartitionConfig::return_indices`]: crate::config::PartitionConfig::return_indices
pub type Partition = Vec<Vec<i64>>;

/// The result of partitioning a list of numbers.
///
/// `sizes[i]` is always the sum of the values placed in `partition[i]`,
/// whether the parts hold values or indices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitioningResult {
    /// The parts.
    pub partition: Partition,
    /// Part sums, positionally aligned with `partition`.
    pub sizes: Vec<i64>,
}

impl PartitioningResult {
    /// Creates a result from parts and their sums.
    pub fn new(partition: Partition, sizes: Vec<i64>) -> Self {
        debug_assert_eq!(partition.len(), sizes.len());
        Self { partition, sizes }
    }

    /// Number of parts.
    pub fn num_parts(&self) -> usize {
        self.partition.len()
    }

    /// Largest part sum minus smallest part sum (0 when there are no parts).
    pub fn spread(&self) -> i64 {
        spread(&self.sizes)
    }

    /// Sum over all parts.
    pub fn total(&self) -> i64 {
        self.sizes.iter().sum()
    }

    /// Maps an index partition back onto `numbers`.
    ///
    /// Only meaningful for results produced with `return_indices` set.
    ///
    /// # Panics
    /// Panics if an index is out of range for `numbers`.
    pub fn gather(&self, numbers: &[i64]) -> Partition {
        self.partition
            .iter()
            .map(|part| part.iter().map(|&i| numbers[i as usize]).collect())
            .collect()
    }
}

/// Difference between the largest and the smallest entry.
pub(crate) fn spread(sizes: &[i64]) -> i64 {
    match (sizes.iter().max(), sizes.iter().min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_and_total() {
        let result = PartitioningResult::new(vec![vec![8], vec![4, 7], vec![5, 6]], vec![8, 11, 11]);
        assert_eq!(result.spread(), 3);
        assert_eq!(result.total(), 30);
        assert_eq!(result.num_parts(), 3);
    }

    #[test]
    fn test_spread_empty() {
        assert_eq!(spread(&[]), 0);
        assert_eq!(spread(&[5]), 0);
    }

    #[test]
    fn test_gather() {
        let numbers = [5, 8, 6, 4, 7];
        let result = PartitioningResult::new(vec![vec![1], vec![3, 4], vec![0, 2]], vec![8, 11, 11]);
        assert_eq!(result.gather(&numbers), vec![vec![8], vec![4, 7], vec![5, 6]]);
    }
}
