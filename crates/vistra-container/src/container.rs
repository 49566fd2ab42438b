//! Versioned ordered container - a duplicate-permitting sequence.
//!
//! The container is the sole mutable state of the traversal engine. It
//! keeps elements in insertion order, allows duplicates, and bumps its
//! version counter exactly once per structural mutation. Traversal views
//! read through the snapshot and version accessors and never mutate.

use crate::error::{ContainerError, Result};
use crate::version::{VersionCounter, VersionWatch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, duplicate-permitting collection with structural versioning.
///
/// Invariant: the version changes if and only if the element sequence
/// changes. `add` and `remove` are the only mutations; both bump the
/// counter exactly once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Container<T> {
    /// Elements in insertion order.
    elements: Vec<T>,
    /// Structural mutation counter (runtime-only, reset on deserialize).
    #[serde(skip)]
    version: VersionCounter,
}

impl<T> Container<T> {
    /// Create an empty container at version 0.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            version: VersionCounter::new(),
        }
    }

    /// Append a value at the end of the sequence. Never fails.
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
        self.version.bump();
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read-only view of the backing sequence, in insertion order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// The current structural version.
    pub fn version(&self) -> u64 {
        self.version.current()
    }

    /// Pin the current version for staleness checks during traversal.
    pub fn watch(&self) -> VersionWatch {
        self.version.watch()
    }
}

impl<T: PartialEq> Container<T> {
    /// Remove every occurrence of `value`, preserving the relative order
    /// of the remaining elements. Bumps the version exactly once no matter
    /// how many occurrences were removed.
    ///
    /// Fails with [`ContainerError::NotFound`] when zero occurrences
    /// exist; the sequence and the version are then left unchanged.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        let before = self.elements.len();
        self.elements.retain(|e| e != value);
        if self.elements.len() == before {
            return Err(ContainerError::NotFound);
        }
        self.version.bump();
        Ok(())
    }

    /// Whether at least one occurrence of `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.iter().any(|e| e == value)
    }

    /// Number of occurrences of `value`.
    pub fn count_of(&self, value: &T) -> usize {
        self.elements.iter().filter(|e| *e == value).count()
    }
}

impl<T: Clone> Container<T> {
    /// Snapshot of the current elements, in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares the element sequences only, never the version.
impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Container::new();
        container.extend(iter);
        container
    }
}

/// Renders as `[e0, e1, ..., e(n-1)]`, comma-space separated.
impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}
