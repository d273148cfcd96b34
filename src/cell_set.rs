//! Index-backed set of cell indices with O(1) insert, remove, membership and
//! uniform random choice. Backs the board's free-cell index and the targeting
//! engine's candidate pool.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CellSet {
    items: Vec<usize>,
    /// Position of each cell index inside `items`, if present.
    slots: Vec<Option<usize>>,
}

impl CellSet {
    /// Empty set able to hold indices `0..capacity`.
    pub(crate) fn empty(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            slots: vec![None; capacity],
        }
    }

    /// Set holding every index `0..capacity`, in ascending order.
    pub(crate) fn full(capacity: usize) -> Self {
        Self {
            items: (0..capacity).collect(),
            slots: (0..capacity).map(Some).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn contains(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(Some(_)))
    }

    /// Returns `true` if the index was newly inserted.
    pub(crate) fn insert(&mut self, idx: usize) -> bool {
        let Some(slot) = self.slots.get_mut(idx) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(self.items.len());
        self.items.push(idx);
        true
    }

    /// Returns `true` if the index was present.
    pub(crate) fn remove(&mut self, idx: usize) -> bool {
        let Some(pos) = self.slots.get_mut(idx).and_then(Option::take) else {
            return false;
        };
        self.items.swap_remove(pos);
        if let Some(&moved) = self.items.get(pos) {
            self.slots[moved] = Some(pos);
        }
        true
    }

    /// Uniformly random member, `None` when empty.
    pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[rng.random_range(0..self.items.len())])
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }
}
