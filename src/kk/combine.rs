//! Bin alignment: all distinct ways to merge two partial partitions.

use std::collections::HashSet;

use super::types::PartialPartition;

/// Merges `first` and `second` bin-for-bin under every bijection between
/// their bins.
///
/// Each merged partition is put in canonical form (bin contents sorted,
/// then bins sorted) and only the first occurrence of each canonical form is
/// kept. Bijections are enumerated as permutations of `first`'s bins in
/// lexicographic order against the fixed order of `second`, which makes the
/// output order deterministic.
///
/// # Panics
/// Panics if the two partitions have a different number of bins.
///
/// # Examples
///
/// ```
/// use u_partition::kk::{combine, PartialPartition};
///
/// let a = PartialPartition::singleton(2, 8, 8);
/// let b = PartialPartition::singleton(2, 7, 7);
/// let merged = combine(&a, &b);
///
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].parts, vec![vec![], vec![7, 8]]);
/// assert_eq!(merged[1].parts, vec![vec![7], vec![8]]);
/// ```
pub fn combine(first: &PartialPartition, second: &PartialPartition) -> Vec<PartialPartition> {
    assert_eq!(
        first.num_parts(),
        second.num_parts(),
        "partial partitions must have the same number of bins"
    );

    let mut seen: HashSet<Vec<Vec<i64>>> = HashSet::new();
    let mut merged = Vec::new();
    let mut permutation: Vec<usize> = (0..first.num_parts()).collect();

    loop {
        let mut parts: Vec<Vec<i64>> = permutation
            .iter()
            .zip(&second.parts)
            .map(|(&i, tail)| {
                let mut bin = Vec::with_capacity(first.parts[i].len() + tail.len());
                bin.extend_from_slice(&first.parts[i]);
                bin.extend_from_slice(tail);
                bin.sort_unstable();
                bin
            })
            .collect();
        parts.sort();

        if !seen.contains(&parts) {
            seen.insert(parts.clone());
            let sizes = parts.iter().map(|bin| bin.iter().sum()).collect();
            merged.push(PartialPartition { parts, sizes });
        }

        if !next_permutation(&mut permutation) {
            break;
        }
    }

    merged
}

/// Advances `items` to the next lexicographic permutation. Returns `false`
/// (leaving `items` untouched) when it already is the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
