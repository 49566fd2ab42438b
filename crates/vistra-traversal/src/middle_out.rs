//! Middle-out order: starts at the middle of the insertion order and
//! spirals outwards.
//!
//! The start is index `n / 2` (rounded down). Steps then alternate one
//! position left, one position right, left first, skipping whichever side
//! is already exhausted. On `[7, 15, 6, 1, 2]` the visiting order is
//! `6, 15, 1, 7, 2`.

use crate::order::TraversalOrder;

/// Visits the middle element first, then alternates left and right of it.
#[derive(Clone, Copy, Debug, Default)]
pub struct MiddleOut;

impl<T> TraversalOrder<T> for MiddleOut {
    fn positions(elements: &[T]) -> Vec<usize> {
        let n = elements.len();
        if n == 0 {
            return Vec::new();
        }

        let mid = n / 2;
        let mut positions = Vec::with_capacity(n);
        positions.push(mid);

        let mut left = mid; // next left emission is left - 1
        let mut right = mid + 1;
        let mut go_left = true;
        while left > 0 || right < n {
            if go_left && left > 0 {
                left -= 1;
                positions.push(left);
            } else if !go_left && right < n {
                positions.push(right);
                right += 1;
            }
            go_left = !go_left;
        }
        positions
    }
}
