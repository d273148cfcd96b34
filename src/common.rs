//! Common types for the board: errors and shot reports.

use crate::ship::ShipId;

/// Errors returned by board, fleet and targeting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A strict segment walk reached a coordinate outside the grid.
    InvalidCoordinates { x: i32, y: i32 },
    /// Placement conflicts with a ship's cell or its buffer zone.
    CellOccupied { x: i32, y: i32 },
    /// The board is attached to a targeting engine and cannot be mutated.
    FieldLocked,
    /// Fleet generation asked for a free cell and none were left.
    OutOfFreeCells,
    /// No free cell yielded a legal run for a ship of this size.
    FleetUnplaceable { size: usize },
    /// Internal invariant violation in the targeting engine.
    Impossible(&'static str),
}

impl BoardError {
    /// `true` for errors that signal a defect rather than a rejected request.
    pub fn is_defect(&self) -> bool {
        matches!(self, BoardError::Impossible(_))
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinates { x, y } => {
                write!(f, "Coordinates ({}, {}) are outside the board", x, y)
            }
            BoardError::CellOccupied { x, y } => {
                write!(f, "Cell ({}, {}) is occupied by another ship", x, y)
            }
            BoardError::FieldLocked => write!(f, "Board is locked by a targeting engine"),
            BoardError::OutOfFreeCells => write!(f, "No free cells left on the board"),
            BoardError::FleetUnplaceable { size } => {
                write!(f, "Unable to place a ship of size {}", size)
            }
            BoardError::Impossible(what) => write!(f, "Impossible state reached: {}", what),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// What a shot found on the cell it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship on the cell.
    Miss,
    /// Hit a ship that still has unshot cells.
    Hit(ShipId),
    /// Hit a ship and every one of its cells is now shot.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Snapshot of a fired shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub x: i32,
    pub y: i32,
    pub outcome: ShotOutcome,
}
