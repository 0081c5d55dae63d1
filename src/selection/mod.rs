// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! The selection set: which segments (or characters) are selected.
//!
//! `Selection` wraps an `Arc<BTreeSet<usize>>` so hosts can clone it
//! cheaply for rendering snapshots while the session mutates its own copy
//! (copy-on-write via `Arc::make_mut`). The `BTreeSet` gives the
//! deterministic ascending iteration order that text resolution depends on.
//!
//! The indices stored are segment positions in segment mode and character
//! indices in character mode; the session owns that interpretation and
//! clears the set whenever it would change (text mutation, mode switch).

pub mod mapper;

pub use mapper::{apply_scribble, apply_tap, densify, touched_char_indices};

use std::collections::BTreeSet;
use std::sync::Arc;

/// A set of selected indices with cheap clone and ordered iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    inner: Arc<BTreeSet<usize>>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check whether an index is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.inner.contains(&index)
    }

    /// Iterate over selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.inner.iter().copied()
    }

    /// Add an index to the selection.
    pub fn insert(&mut self, index: usize) {
        Arc::make_mut(&mut self.inner).insert(index);
    }

    /// Remove an index from the selection.
    pub fn remove(&mut self, index: usize) {
        Arc::make_mut(&mut self.inner).remove(&index);
    }

    /// Toggle an index: deselect if present, select otherwise.
    pub fn toggle(&mut self, index: usize) {
        let set = Arc::make_mut(&mut self.inner);
        if !set.remove(&index) {
            set.insert(index);
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        if !self.inner.is_empty() {
            self.inner = Arc::new(BTreeSet::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selection_is_empty() {
        let sel = Selection::new();
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn insert_and_contains() {
        let mut sel = Selection::new();
        sel.insert(3);
        assert!(sel.contains(3));
        assert!(!sel.contains(4));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn toggle_round_trips() {
        let mut sel = Selection::new();
        sel.toggle(7);
        assert!(sel.contains(7));
        sel.toggle(7);
        assert!(!sel.contains(7));
        assert!(sel.is_empty());
    }

    #[test]
    fn iteration_is_ascending() {
        let mut sel = Selection::new();
        for i in [4, 1, 3, 0] {
            sel.insert(i);
        }
        let order: Vec<usize> = sel.iter().collect();
        assert_eq!(order, [0, 1, 3, 4]);
    }

    #[test]
    fn clear_empties() {
        let mut sel = Selection::new();
        sel.insert(1);
        sel.insert(2);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut sel = Selection::new();
        sel.insert(1);

        let mut clone = sel.clone();
        clone.insert(2);

        assert!(!sel.contains(2));
        assert!(clone.contains(2));
    }
}
