//! Shared helpers for the test suites.

use crate::result::{spread, PartitioningResult};

/// Smallest achievable spread, by trying all `k^n` assignments.
pub(crate) fn brute_force_min_spread(numbers: &[i64], num_parts: usize) -> i64 {
    let mut best = i64::MAX;
    let mut assignment = vec![0usize; numbers.len()];
    loop {
        let mut sizes = vec![0i64; num_parts];
        for (&part, &value) in assignment.iter().zip(numbers) {
            sizes[part] += value;
        }
        best = best.min(spread(&sizes));

        // odometer increment over base num_parts
        let mut digit = 0;
        loop {
            if digit == assignment.len() {
                return best;
            }
            assignment[digit] += 1;
            if assignment[digit] < num_parts {
                break;
            }
            assignment[digit] = 0;
            digit += 1;
        }
    }
}

/// Parts sorted by content with their sizes carried along, for comparing
/// results whose bin order is not significant.
pub(crate) fn sorted_by_parts(result: &PartitioningResult) -> (Vec<Vec<i64>>, Vec<i64>) {
    let mut bins: Vec<(Vec<i64>, i64)> = result
        .partition
        .iter()
        .cloned()
        .zip(result.sizes.iter().copied())
        .collect();
    bins.sort();
    bins.into_iter().unzip()
}

#[test]
fn test_brute_force_min_spread() {
    assert_eq!(brute_force_min_spread(&[4, 5, 6, 7, 8], 2), 0);
    assert_eq!(brute_force_min_spread(&[4, 5, 6, 7, 8], 3), 3);
    assert_eq!(brute_force_min_spread(&[], 3), 0);
    assert_eq!(brute_force_min_spread(&[5], 1), 0);
}
