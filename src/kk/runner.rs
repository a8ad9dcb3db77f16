//! One-shot Karmarkar-Karp (largest differencing method).
//!
//! # Algorithm
//!
//! 1. Turn every number into a partial partition with `k - 1` empty bins
//!    and one bin holding the number, keyed by the number itself
//! 2. Repeatedly pop the two partial partitions with the largest spread and
//!    merge them, pairing the `j`-th bin of the first with the
//!    `(k - 1 - j)`-th bin of the second (bins are kept sorted by size, so
//!    large bins meet small ones)
//! 3. Stop when a single partial partition remains
//!
//! # Reference
//!
//! Karmarkar, N. & Karp, R. M. (1982). "The differencing method of set
//! partitioning", Technical Report UCB/CSD 82/113.

use std::collections::BinaryHeap;

use super::types::{Entry, PartialPartition};
use crate::config::PartitionConfig;
use crate::error::Result;
use crate::result::PartitioningResult;

/// One-shot Karmarkar-Karp runner.
pub struct KarmarkarKarpRunner;

impl KarmarkarKarpRunner {
    /// Partitions `numbers` into `config.num_parts` parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::config::PartitionConfig;
    /// use u_partition::kk::KarmarkarKarpRunner;
    ///
    /// let result = KarmarkarKarpRunner::run(&[4, 5, 6, 7, 8], &PartitionConfig::new(3)).unwrap();
    /// assert_eq!(result.partition, vec![vec![8], vec![4, 7], vec![5, 6]]);
    /// assert_eq!(result.sizes, vec![8, 11, 11]);
    /// ```
    ///
    /// # Errors
    /// Returns an error if `config` does not validate.
    pub fn run(numbers: &[i64], config: &PartitionConfig) -> Result<PartitioningResult> {
        config.validate()?;
        let num_parts = config.num_parts;

        let mut heap: BinaryHeap<Entry<PartialPartition>> = numbers
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let label = if config.return_indices { i as i64 } else { value };
                Entry::new(value, i as u64, PartialPartition::singleton(num_parts, label, value))
            })
            .collect();
        let mut next_seq = numbers.len() as u64;

        while heap.len() > 1 {
            let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let merged = merge_opposite(first.state, second.state).sorted_by_size();
            heap.push(Entry::new(merged.spread(), next_seq, merged));
            next_seq += 1;
        }

        let state = heap
            .pop()
            .map(|entry| entry.state)
            .unwrap_or_else(|| PartialPartition::empty(num_parts));
        Ok(state.into_result())
    }
}

/// Pairs bin `j` of `first` with bin `k - 1 - j` of `second`.
fn merge_opposite(first: PartialPartition, second: PartialPartition) -> PartialPartition {
    let (parts, sizes) = first
        .parts
        .into_iter()
        .zip(first.sizes)
        .zip(second.parts.into_iter().zip(second.sizes).rev())
        .map(|((mut part, size), (tail, tail_size))| {
            part.extend(tail);
            (part, size + tail_size)
        })
        .unzip();
    PartialPartition { parts, sizes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PartitionError;

    fn run(numbers: &[i64], num_parts: usize, return_indices: bool) -> PartitioningResult {
        let config = PartitionConfig::new(num_parts).with_return_indices(return_indices);
        KarmarkarKarpRunner::run(numbers, &config).unwrap()
    }

    #[test]
    fn test_karmarkar_karp() {
        let result = run(&[4, 5, 6, 7, 8], 3, false);
        assert_eq!(result.partition, vec![vec![8], vec![4, 7], vec![5, 6]]);
        assert_eq!(result.sizes, vec![8, 11, 11]);
    }

    #[test]
    fn test_karmarkar_karp_indices() {
        let result = run(&[4, 5, 6, 7, 8], 3, true);
        assert_eq!(result.partition, vec![vec![4], vec![0, 3], vec![1, 2]]);
        assert_eq!(result.sizes, vec![8, 11, 11]);
    }

    #[test]
    fn test_karmarkar_karp_unordered() {
        let result = run(&[5, 8, 6, 4, 7], 3, false);
        assert_eq!(result.partition, vec![vec![8], vec![4, 7], vec![5, 6]]);
        assert_eq!(result.sizes, vec![8, 11, 11]);
    }

    #[test]
    fn test_karmarkar_karp_unordered_indices() {
        let result = run(&[5, 8, 6, 4, 7], 3, true);
        assert_eq!(result.partition, vec![vec![1], vec![3, 4], vec![0, 2]]);
        assert_eq!(result.sizes, vec![8, 11, 11]);
    }

    #[test]
    fn test_karmarkar_karp_large_problem() {
        let numbers: Vec<i64> = (800..1200).collect();
        let result = run(&numbers, 7, false);
        let sums: Vec<i64> = result.partition.iter().map(|p| p.iter().sum()).collect();
        assert_eq!(sums, result.sizes);
        assert_eq!(result.spread(), 603);
    }

    #[test]
    fn test_karmarkar_karp_two_way_difference() {
        // Classic differencing: 8-7=1, 6-5=1, 4-1=3, 3-1=2
        let result = run(&[4, 5, 6, 7, 8], 2, false);
        assert_eq!(result.spread(), 2);
        assert_eq!(result.total(), 30);
    }

    #[test]
    fn test_empty_input_gives_empty_parts() {
        let result = run(&[], 3, false);
        assert_eq!(result.partition, vec![Vec::<i64>::new(); 3]);
        assert_eq!(result.sizes, vec![0, 0, 0]);
    }

    #[test]
    fn test_more_parts_than_numbers() {
        let result = run(&[3, 1], 4, false);
        assert_eq!(result.sizes, vec![0, 0, 1, 3]);
    }

    #[test]
    fn test_single_part() {
        let result = run(&[3, 1, 2], 1, false);
        assert_eq!(result.sizes, vec![6]);
        assert_eq!(result.partition[0].len(), 3);
    }

    #[test]
    fn test_zero_parts_rejected() {
        let err = KarmarkarKarpRunner::run(&[1, 2, 3], &PartitionConfig::new(0)).unwrap_err();
        assert_eq!(err, PartitionError::ZeroParts);
    }
}
