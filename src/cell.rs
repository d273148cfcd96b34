//! A single grid slot.

use alloc::collections::BTreeSet;

use crate::ship::ShipId;

/// Derived occupancy state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// No ship on the cell and no ship next to it.
    Empty,
    /// No ship on the cell, but it lies in at least one ship's buffer zone.
    Buffer,
    /// A ship occupies the cell.
    Occupied,
}

/// Cell at `(x, y)`. Its state is never stored: it follows from the owner and
/// the set of ships whose buffer zone covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: i32,
    y: i32,
    shot: bool,
    marked: bool,
    owner: Option<ShipId>,
    related: BTreeSet<ShipId>,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            shot: false,
            marked: false,
            owner: None,
            related: BTreeSet::new(),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// `(x, y)`
    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn state(&self) -> CellState {
        match (self.owner, self.related.is_empty()) {
            (Some(_), _) => CellState::Occupied,
            (None, false) => CellState::Buffer,
            (None, true) => CellState::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state() == CellState::Empty
    }

    pub fn is_occupied(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_shot(&self) -> bool {
        self.shot
    }

    /// Display highlight flag, cleared by a board reset.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Ship occupying this cell.
    pub fn owner(&self) -> Option<ShipId> {
        self.owner
    }

    /// Ships whose buffer zone covers this cell.
    pub fn related_ships(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.related.iter().copied()
    }

    pub(crate) fn set_owner(&mut self, owner: Option<ShipId>) {
        self.owner = owner;
    }

    pub(crate) fn relate(&mut self, ship: ShipId) {
        self.related.insert(ship);
    }

    pub(crate) fn unrelate(&mut self, ship: ShipId) {
        self.related.remove(&ship);
    }

    pub(crate) fn shoot(&mut self) {
        self.shot = true;
    }

    pub(crate) fn mark(&mut self) {
        self.marked = true;
    }

    pub(crate) fn reset_flags(&mut self) {
        self.shot = false;
        self.marked = false;
    }
}
