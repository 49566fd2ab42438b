//! Structural version tracking for containers.
//!
//! Every structural mutation of a container bumps one monotonically
//! increasing counter. An iterator pins the counter value at construction
//! through a [`VersionWatch`] and re-reads the live value on every access,
//! so a mutation under a live iterator becomes a detectable error rather
//! than a silent reordering.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic mutation counter owned by a container.
///
/// The value lives in a shared single-threaded cell so that watches handed
/// out to iterators keep reading the live counter after the container has
/// been mutably borrowed and released again. The cell is `Rc`-based and
/// deliberately neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct VersionCounter {
    cell: Rc<Cell<u64>>,
}

impl VersionCounter {
    /// Create a counter starting at version 0.
    pub fn new() -> Self {
        VersionCounter {
            cell: Rc::new(Cell::new(0)),
        }
    }

    /// The current version.
    pub fn current(&self) -> u64 {
        self.cell.get()
    }

    /// Record one structural mutation, returning the new version.
    pub fn bump(&self) -> u64 {
        let next = self.cell.get() + 1;
        self.cell.set(next);
        next
    }

    /// Pin the current version for later staleness checks.
    pub fn watch(&self) -> VersionWatch {
        VersionWatch {
            cell: Rc::clone(&self.cell),
            expected: self.cell.get(),
        }
    }
}

impl Default for VersionCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning produces an independent counter seeded with the current value.
/// Watches taken from the original never observe mutations of the clone.
impl Clone for VersionCounter {
    fn clone(&self) -> Self {
        VersionCounter {
            cell: Rc::new(Cell::new(self.cell.get())),
        }
    }
}

/// A pinned observation of a [`VersionCounter`].
///
/// Compares the version seen at creation time against the live value.
/// The check is by value, not identity: any bump since the watch was
/// taken makes it stale, no matter what mutated.
#[derive(Debug, Clone)]
pub struct VersionWatch {
    cell: Rc<Cell<u64>>,
    expected: u64,
}

impl VersionWatch {
    /// The version pinned when the watch was taken.
    pub fn expected(&self) -> u64 {
        self.expected
    }

    /// The counter's live value.
    pub fn observed(&self) -> u64 {
        self.cell.get()
    }

    /// Whether the counter still holds the pinned value.
    pub fn is_current(&self) -> bool {
        self.expected == self.cell.get()
    }
}
