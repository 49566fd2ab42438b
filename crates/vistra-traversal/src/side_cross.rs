//! Side-cross order: alternates between the extremes of the sorted order.
//!
//! On `[7, 15, 6, 1, 2]` the visiting order is `1, 15, 2, 7, 6`:
//! min, max, 2nd-min, 2nd-max, ... with a lone middle element emitted once.

use crate::ascending::sorted_positions;
use crate::order::TraversalOrder;

/// Visits the smallest and largest remaining values in alternation,
/// closing in from both ends of the sorted order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SideCross;

impl<T: Ord> TraversalOrder<T> for SideCross {
    fn positions(elements: &[T]) -> Vec<usize> {
        let sorted = sorted_positions(elements);
        let n = sorted.len();
        let mut positions = Vec::with_capacity(n);

        let mut left = 0;
        let mut right = n;
        while left < right {
            positions.push(sorted[left]);
            left += 1;
            if left < right {
                right -= 1;
                positions.push(sorted[right]);
            }
        }
        positions
    }
}
