//! Recovery of input positions from a value partition.

use crate::result::Partition;

/// Replaces every value in `partition` with its position in `numbers`.
///
/// Parts are walked in order; each value takes the first position holding
/// that value which has not been handed out yet, so repeated values map to
/// distinct positions.
///
/// # Panics
/// Panics if `partition` holds a value (or more copies of a value) than
/// `numbers` provides.
///
/// # Examples
///
/// ```
/// use u_partition::indices::recover_indices;
///
/// let numbers = [3, 1, 3];
/// let parts = vec![vec![3, 1], vec![3]];
/// assert_eq!(recover_indices(&numbers, &parts), vec![vec![0, 1], vec![2]]);
/// ```
pub fn recover_indices(numbers: &[i64], partition: &Partition) -> Partition {
    let mut consumed = vec![false; numbers.len()];
    partition
        .iter()
        .map(|part| {
            part.iter()
                .map(|&value| {
                    let position = numbers
                        .iter()
                        .zip(&consumed)
                        .position(|(&n, &used)| !used && n == value)
                        .unwrap_or_else(|| panic!("value {value} is not available in the input"));
                    consumed[position] = true;
                    position as i64
                })
                .collect()
        })
        .collect()
}
