//! Lower bound on the final spread reachable from a search node.

use super::types::PartialPartition;

/// Lower bound on the spread of any complete partition obtainable by
/// merging `states`.
///
/// Let `M` be the largest bin size across all states and `S` the sum of all
/// bin sizes. Merging only grows bins, so the final largest part is at
/// least `M`, while the final smallest part is at most the remaining
/// `S - M` spread evenly over `k - 1` parts. The bound is therefore
/// `M - floor((S - M) / (k - 1))`. Negating it gives the upper bound on the
/// negated spread used for pruning.
///
/// The bound is admissible for non-negative inputs. With a single part every
/// partition has spread zero and the bound is `0`.
///
/// # Examples
///
/// ```
/// use u_partition::kk::{lower_bound, PartialPartition};
///
/// let states = [
///     PartialPartition::singleton(3, 10, 10),
///     PartialPartition::singleton(3, 2, 2),
///     PartialPartition::singleton(3, 1, 1),
/// ];
/// assert_eq!(lower_bound(&states, 3), 9);
/// ```
pub fn lower_bound<'a, I>(states: I, num_parts: usize) -> i64
where
    I: IntoIterator<Item = &'a PartialPartition>,
{
    if num_parts <= 1 {
        return 0;
    }

    let mut largest: Option<i64> = None;
    let mut total = 0i64;
    for &size in states.into_iter().flat_map(|state| state.sizes.iter()) {
        largest = Some(largest.map_or(size, |m| m.max(size)));
        total += size;
    }

    match largest {
        Some(max) => max - (total - max).div_euclid(num_parts as i64 - 1),
        None => 0,
    }
}
