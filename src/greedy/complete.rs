//! Complete greedy: depth-first search over every part assignment, in the
//! order the greedy heuristic would choose.
//!
//! # Algorithm
//!
//! 1. Sort the numbers in descending order, remembering their positions
//! 2. Start from `k` empty parts on an explicit stack
//! 3. Pop an assignment:
//!    a. If every number is placed, evaluate the objective and yield the
//!       partition when it strictly improves on the best so far
//!    b. Otherwise place the next number into each part, pushing children
//!       in order of decreasing part sum so that the smallest part (the
//!       greedy choice) is explored first
//! 4. Repeat until the stack is empty
//!
//! There is no pruning bound: the whole `k^n` tree can be visited. Callers
//! are expected to stop pulling results once they are satisfied.

use std::cmp::Reverse;

use tracing::debug;

use super::objective::{Objective, Spread};
use super::runner::descending;
use crate::config::PartitionConfig;
use crate::error::Result;
use crate::result::PartitioningResult;
use crate::stats::SearchStats;

/// A partial assignment of the first `depth` sorted numbers.
#[derive(Debug, Clone)]
struct Assignment {
    parts: Vec<Vec<i64>>,
    positions: Option<Vec<Vec<i64>>>,
    sizes: Vec<i64>,
    depth: usize,
}

/// Anytime iterator over partitions with strictly improving objective value.
///
/// The first partition returned is the greedy one (with the part order
/// reversed). Dropping the iterator abandons the remaining search.
///
/// # Examples
///
/// ```
/// use u_partition::config::PartitionConfig;
/// use u_partition::greedy::CompleteGreedy;
///
/// let numbers: Vec<i64> = (20..30).collect();
/// let search = CompleteGreedy::new(&numbers, &PartitionConfig::new(3)).unwrap();
/// let spreads: Vec<i64> = search.take(3).map(|r| r.spread()).collect();
/// assert_eq!(spreads, vec![19, 18, 16]);
/// ```
#[derive(Debug, Clone)]
pub struct CompleteGreedy<O = Spread>
where
    O: Objective,
{
    order: Vec<(usize, i64)>,
    objective: O,
    stack: Vec<Assignment>,
    best: Option<O::Value>,
    stats: SearchStats,
}

impl CompleteGreedy<Spread> {
    /// Prepares a search minimizing the spread.
    ///
    /// # Errors
    /// Returns an error if `config` does not validate.
    pub fn new(numbers: &[i64], config: &PartitionConfig) -> Result<Self> {
        Self::with_objective(numbers, config, Spread)
    }
}

impl<O> CompleteGreedy<O>
where
    O: Objective,
{
    /// Prepares a search minimizing `objective`.
    ///
    /// # Errors
    /// Returns an error if `config` does not validate.
    pub fn with_objective(numbers: &[i64], config: &PartitionConfig, objective: O) -> Result<Self> {
        config.validate()?;
        let num_parts = config.num_parts;

        let root = Assignment {
            parts: vec![Vec::new(); num_parts],
            positions: config.return_indices.then(|| vec![Vec::new(); num_parts]),
            sizes: vec![0; num_parts],
            depth: 0,
        };

        Ok(Self {
            order: descending(numbers),
            objective,
            stack: vec![root],
            best: None,
            stats: SearchStats::default(),
        })
    }

    /// Counters for the search performed so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Objective value of the best partition returned so far.
    pub fn best_value(&self) -> Option<&O::Value> {
        self.best.as_ref()
    }
}

impl<O> Iterator for CompleteGreedy<O>
where
    O: Objective,
{
    type Item = PartitioningResult;

    fn next(&mut self) -> Option<PartitioningResult> {
        while let Some(node) = self.stack.pop() {
            self.stats.on_node_explored();
            self.stats.on_depth(node.depth);

            if node.depth == self.order.len() {
                let partition = node.positions.as_ref().unwrap_or(&node.parts);
                let value = self.objective.evaluate(partition, &node.sizes);
                let improves = match &self.best {
                    Some(best) => value < *best,
                    None => value.partial_cmp(&value).is_some(),
                };
                if !improves {
                    continue;
                }
                debug!(
                    objective = ?value,
                    explored = self.stats.nodes_explored,
                    "complete greedy improved"
                );
                self.best = Some(value);
                self.stats.on_improvement();
                let partition = node.positions.unwrap_or(node.parts);
                return Some(PartitioningResult::new(partition, node.sizes));
            }

            let (position, value) = self.order[node.depth];
            let mut targets: Vec<usize> = (0..node.sizes.len()).collect();
            targets.sort_by_key(|&i| Reverse(node.sizes[i]));
            self.stats.on_generated(targets.len());

            for part in targets {
                let mut child = node.clone();
                child.parts[part].push(value);
                if let Some(positions) = child.positions.as_mut() {
                    positions[part].push(position as i64);
                }
                child.sizes[part] += value;
                child.depth += 1;
                self.stack.push(child);
            }
        }

        debug!(
            explored = self.stats.nodes_explored,
            improvements = self.stats.improvements,
            "complete greedy finished"
        );
        None
    }
}
