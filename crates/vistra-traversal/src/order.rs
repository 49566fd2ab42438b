//! The traversal-order seam shared by every view.
//!
//! An order is a pure function from an element snapshot to a *position
//! list*: the sequence of indices an iterator will visit. The list is
//! computed once, eagerly, when an iterator is constructed; the iterator
//! itself is order-agnostic. Implementations must return a permutation of
//! `0..elements.len()` and must break value ties by original index order
//! (stable sorts only), so equal-valued elements retain their relative
//! insertion order.

/// A traversal order over an element snapshot.
pub trait TraversalOrder<T> {
    /// Compute the visiting order as indices into `elements`.
    fn positions(elements: &[T]) -> Vec<usize>;
}
