//! Complete Karmarkar-Karp: branch-and-bound over merge alignments.
//!
//! # Algorithm
//!
//! 1. Sort the numbers in descending order; each becomes a partial partition
//!    with `k - 1` empty bins and one singleton bin, keyed by its value
//! 2. The root search node holds all of them; nodes live on an explicit
//!    depth-first stack
//! 3. Pop a node:
//!    a. Discard it if its lower bound cannot beat the best spread so far
//!       (only when every number is non-negative; otherwise nothing is pruned)
//!    b. If only one partial partition is left and it improves on the best,
//!       yield it (and stop if its spread is zero)
//!    c. Otherwise pop its two largest-spread partial partitions, combine
//!       them in every distinct alignment, and push one child per alignment
//! 4. Repeat until the stack is empty
//!
//! Children are pushed in the order [`combine`] generates them, so the last
//! alignment (which pairs the largest bins of one side with the smallest of
//! the other, as plain Karmarkar-Karp does) is explored first.
//!
//! # Reference
//!
//! Korf, R. E. (1998). "A complete anytime algorithm for number partitioning",
//! *Artificial Intelligence* 106(2), 181-203.

use std::collections::BinaryHeap;
use std::sync::Arc;

use tracing::{debug, trace};

use super::bound::lower_bound;
use super::combine::combine;
use super::types::{Entry, PartialPartition};
use crate::config::PartitionConfig;
use crate::error::Result;
use crate::indices::recover_indices;
use crate::result::PartitioningResult;
use crate::stats::SearchStats;

/// Partial partitions not yet merged, ordered by spread.
type SearchNode = BinaryHeap<Entry<Arc<PartialPartition>>>;

/// Anytime iterator over strictly improving partitions.
///
/// Each call to [`next`](Iterator::next) resumes the depth-first search and
/// returns as soon as a partition with a smaller spread than every previous
/// one is found. The iterator ends when the search space is exhausted or
/// right after a perfectly balanced partition is returned. Dropping it
/// abandons the remaining search.
///
/// # Examples
///
/// ```
/// use u_partition::config::PartitionConfig;
/// use u_partition::kk::CompleteKarmarkarKarp;
///
/// let search = CompleteKarmarkarKarp::new(&[4, 5, 6, 7, 8], &PartitionConfig::new(2)).unwrap();
/// let spreads: Vec<i64> = search.map(|r| r.spread()).collect();
/// assert_eq!(spreads, vec![2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct CompleteKarmarkarKarp {
    numbers: Vec<i64>,
    num_parts: usize,
    return_indices: bool,
    /// The lower bound assumes merging never shrinks a bin, which only holds
    /// when no input is negative.
    prune: bool,
    stack: Vec<SearchNode>,
    best: Option<i64>,
    next_seq: u64,
    stats: SearchStats,
}

impl CompleteKarmarkarKarp {
    /// Prepares the search. No work happens until the first result is pulled.
    ///
    /// # Errors
    /// Returns an error if `config` does not validate.
    pub fn new(numbers: &[i64], config: &PartitionConfig) -> Result<Self> {
        config.validate()?;
        let num_parts = config.num_parts;

        let mut sorted = numbers.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut root = SearchNode::with_capacity(sorted.len().max(1));
        if sorted.is_empty() {
            root.push(Entry::new(0, 0, Arc::new(PartialPartition::empty(num_parts))));
        }
        for (seq, &value) in sorted.iter().enumerate() {
            let state = PartialPartition::singleton(num_parts, value, value);
            root.push(Entry::new(value, seq as u64, Arc::new(state)));
        }
        let next_seq = root.len() as u64;

        Ok(Self {
            numbers: numbers.to_vec(),
            num_parts,
            return_indices: config.return_indices,
            prune: numbers.iter().all(|&value| value >= 0),
            stack: vec![root],
            best: None,
            next_seq,
            stats: SearchStats::default(),
        })
    }

    /// Counters for the search performed so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Spread of the best partition returned so far.
    pub fn best_spread(&self) -> Option<i64> {
        self.best
    }

    /// Handles a node holding a single, fully merged partial partition.
    fn complete(&mut self, mut node: SearchNode) -> Option<PartitioningResult> {
        let entry = node.pop()?;
        let spread = entry.state.spread();
        if self.best.is_some_and(|best| spread >= best) {
            return None;
        }

        self.best = Some(spread);
        self.stats.on_improvement();
        debug!(
            spread,
            explored = self.stats.nodes_explored,
            pruned = self.stats.nodes_pruned,
            "complete karmarkar-karp improved"
        );
        if spread == 0 {
            debug!("perfect partition found, stopping search");
            self.stack.clear();
        }

        let state = Arc::try_unwrap(entry.state).unwrap_or_else(|shared| (*shared).clone());
        let partition = if self.return_indices {
            recover_indices(&self.numbers, &state.parts)
        } else {
            state.parts
        };
        Some(PartitioningResult::new(partition, state.sizes))
    }
}

impl Iterator for CompleteKarmarkarKarp {
    type Item = PartitioningResult;

    fn next(&mut self) -> Option<PartitioningResult> {
        while let Some(mut node) = self.stack.pop() {
            self.stats.on_node_explored();
            self.stats
                .on_depth(self.numbers.len().saturating_sub(node.len()));

            if let Some(best) = self.best.filter(|_| self.prune) {
                let bound = lower_bound(node.iter().map(|entry| entry.state.as_ref()), self.num_parts);
                if bound >= best {
                    trace!(bound, best, "pruned node");
                    self.stats.on_pruned();
                    continue;
                }
            }

            if node.len() == 1 {
                if let Some(result) = self.complete(node) {
                    return Some(result);
                }
                continue;
            }

            let (Some(first), Some(second)) = (node.pop(), node.pop()) else {
                continue;
            };
            let merged = combine(&first.state, &second.state);
            self.stats.on_generated(merged.len());
            for state in merged {
                let state = state.sorted_by_size();
                let mut child = node.clone();
                child.push(Entry::new(state.spread(), self.next_seq, Arc::new(state)));
                self.next_seq += 1;
                self.stack.push(child);
            }
        }

        debug!(
            explored = self.stats.nodes_explored,
            pruned = self.stats.nodes_pruned,
            improvements = self.stats.improvements,
            "complete karmarkar-karp finished"
        );
        None
    }
}
