//! Ships registered on a board.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::segment::Segment;

/// Identifier of a ship, unique for the lifetime of the board that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) u32);

impl ShipId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Damage status, derived from the shot flags of the ship's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipStatus {
    Intact,
    Damaged,
    Destroyed,
}

/// A validated placement. Holds indices into its board's cell grid: the cells
/// it owns, in segment order, and the buffer cells it shares in.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    segment: Segment,
    cells: Vec<usize>,
    buffer: Vec<usize>,
}

impl Ship {
    pub(crate) fn new(id: ShipId, segment: Segment, cells: Vec<usize>, buffer: Vec<usize>) -> Self {
        Self {
            id,
            segment,
            cells,
            buffer,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Segment the ship was placed with.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Number of owned cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells in the buffer zone.
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn cell_indices(&self) -> &[usize] {
        &self.cells
    }

    pub(crate) fn buffer_indices(&self) -> &[usize] {
        &self.buffer
    }

    /// Status of the ship as seen on `board`, which must be the board that
    /// placed it.
    pub fn status(&self, board: &Board) -> ShipStatus {
        let shot = board.ship_cells(self).filter(|c| c.is_shot()).count();
        if shot == 0 {
            ShipStatus::Intact
        } else if shot < self.size() {
            ShipStatus::Damaged
        } else {
            ShipStatus::Destroyed
        }
    }

    pub fn is_destroyed(&self, board: &Board) -> bool {
        self.status(board) == ShipStatus::Destroyed
    }

    pub fn is_intact(&self, board: &Board) -> bool {
        self.status(board) == ShipStatus::Intact
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, segment: {:?}, size: {}, buffer: {} }}",
            self.id,
            self.segment,
            self.cells.len(),
            self.buffer.len(),
        )
    }
}
