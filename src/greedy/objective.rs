//! Objectives for complete-greedy search.

use std::fmt::Debug;

use crate::result::spread;

/// A function of a complete partition to be minimized.
///
/// `partition` is the completed assignment as it will be returned: values,
/// or input positions when indices are requested. `sizes[i]` is always the
/// sum of the values in part `i`.
///
/// Any closure `Fn(&[Vec<i64>], &[i64]) -> V` is an objective:
///
/// ```
/// use u_partition::greedy::Objective;
///
/// let smallest = |_: &[Vec<i64>], sizes: &[i64]| sizes.iter().copied().min().unwrap_or(0);
/// assert_eq!(smallest.evaluate(&[vec![1], vec![2, 3]], &[1, 5]), 1);
/// ```
pub trait Objective {
    /// Objective value. Lower is better; values that do not compare with
    /// themselves (such as NaN) are never accepted.
    type Value: PartialOrd + Debug;

    /// Evaluates a complete partition.
    fn evaluate(&self, partition: &[Vec<i64>], sizes: &[i64]) -> Self::Value;
}

impl<F, V> Objective for F
where
    F: Fn(&[Vec<i64>], &[i64]) -> V,
    V: PartialOrd + Debug,
{
    type Value = V;

    fn evaluate(&self, partition: &[Vec<i64>], sizes: &[i64]) -> V {
        self(partition, sizes)
    }
}

/// Largest part sum minus smallest part sum. The default objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spread;

impl Objective for Spread {
    type Value = i64;

    fn evaluate(&self, _partition: &[Vec<i64>], sizes: &[i64]) -> i64 {
        spread(sizes)
    }
}

/// Sum of the `parts` largest part sums (minimizing it keeps the largest
/// parts small).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargestSums {
    /// How many of the largest parts are summed.
    pub parts: usize,
}

impl Default for LargestSums {
    fn default() -> Self {
        Self { parts: 1 }
    }
}

impl Objective for LargestSums {
    type Value = i64;

    fn evaluate(&self, _partition: &[Vec<i64>], sizes: &[i64]) -> i64 {
        let mut sorted = sizes.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.iter().take(self.parts).sum()
    }
}

/// Negated sum of the `parts` smallest part sums (minimizing it makes the
/// smallest parts large).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallestSums {
    /// How many of the smallest parts are summed.
    pub parts: usize,
}

impl Default for SmallestSums {
    fn default() -> Self {
        Self { parts: 1 }
    }
}

impl Objective for SmallestSums {
    type Value = i64;

    fn evaluate(&self, _partition: &[Vec<i64>], sizes: &[i64]) -> i64 {
        let mut sorted = sizes.to_vec();
        sorted.sort_unstable();
        -sorted.iter().take(self.parts).sum::<i64>()
    }
}
