//! One-shot greedy partitioning (longest processing time first).

use crate::config::PartitionConfig;
use crate::error::Result;
use crate::result::PartitioningResult;

/// Greedy runner: take the numbers from largest to smallest and put each
/// into the part with the currently smallest sum.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Partitions `numbers` into `config.num_parts` parts.
    ///
    /// Ties between equal numbers keep their input order; ties between
    /// equally small parts go to the lowest part index.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::config::PartitionConfig;
    /// use u_partition::greedy::GreedyRunner;
    ///
    /// let result = GreedyRunner::run(&[4, 5, 6, 7, 8], &PartitionConfig::new(3)).unwrap();
    /// assert_eq!(result.partition, vec![vec![8], vec![7, 4], vec![6, 5]]);
    /// assert_eq!(result.sizes, vec![8, 11, 11]);
    /// ```
    ///
    /// # Errors
    /// Returns an error if `config` does not validate.
    pub fn run(numbers: &[i64], config: &PartitionConfig) -> Result<PartitioningResult> {
        config.validate()?;
        let num_parts = config.num_parts;

        let mut partition = vec![Vec::new(); num_parts];
        let mut sizes = vec![0i64; num_parts];
        for (index, value) in descending(numbers) {
            let smallest = (0..num_parts).min_by_key(|&i| sizes[i]).unwrap_or(0);
            sizes[smallest] += value;
            partition[smallest].push(if config.return_indices { index as i64 } else { value });
        }

        Ok(PartitioningResult::new(partition, sizes))
    }
}

/// `(position, value)` pairs sorted by decreasing value; equal values keep
/// their input order.
pub(crate) fn descending(numbers: &[i64]) -> Vec<(usize, i64)> {
    let mut sorted: Vec<(usize, i64)> = numbers.iter().copied().enumerate().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}
