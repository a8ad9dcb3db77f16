//! Partial partitions and their priority-queue entries.

use std::cmp::Ordering;

use crate::result::{spread, PartitioningResult};

/// A partition of a subset of the input into exactly `k` bins.
///
/// `parts` holds labels (values, or positions in the one-shot index mode);
/// `sizes[i]` is the sum of the values placed in `parts[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPartition {
    /// The bins.
    pub parts: Vec<Vec<i64>>,
    /// Bin sums, positionally aligned with `parts`.
    pub sizes: Vec<i64>,
}

impl PartialPartition {
    /// `num_parts` empty bins.
    pub fn empty(num_parts: usize) -> Self {
        Self {
            parts: vec![Vec::new(); num_parts],
            sizes: vec![0; num_parts],
        }
    }

    /// `num_parts - 1` empty bins followed by a bin holding one item.
    ///
    /// # Panics
    /// Panics if `num_parts` is zero.
    pub fn singleton(num_parts: usize, label: i64, value: i64) -> Self {
        let mut state = Self::empty(num_parts);
        state.parts[num_parts - 1].push(label);
        state.sizes[num_parts - 1] = value;
        state
    }

    /// Number of bins.
    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// Largest bin sum minus smallest bin sum.
    pub fn spread(&self) -> i64 {
        spread(&self.sizes)
    }

    /// Reorders bins by ascending size. Bins of equal size keep their
    /// relative order.
    pub fn sorted_by_size(self) -> Self {
        let mut bins: Vec<(Vec<i64>, i64)> = self.parts.into_iter().zip(self.sizes).collect();
        bins.sort_by_key(|(_, size)| *size);
        let (parts, sizes) = bins.into_iter().unzip();
        Self { parts, sizes }
    }

    /// Converts into a caller-facing result.
    pub fn into_result(self) -> PartitioningResult {
        PartitioningResult::new(self.parts, self.sizes)
    }
}

/// Max-heap entry: the largest key pops first, ties go to the entry that was
/// created first.
///
/// The sequence number makes the order total without comparing partition
/// contents.
#[derive(Debug, Clone)]
pub(crate) struct Entry<S> {
    pub(crate) key: i64,
    pub(crate) seq: u64,
    pub(crate) state: S,
}

impl<S> Entry<S> {
    pub(crate) fn new(key: i64, seq: u64, state: S) -> Self {
        Self { key, seq, state }
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
