//! Commonly used types and utilities for ease of import.

pub use crate::{
    fill, reset_and_fill, Board, BoardConfig, BoardError, Cell, CellState, Mode, Segment,
    SharedBoard, Ship, ShipId, ShipStatus, Shot, ShotOutcome, TargetingEngine, STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, init_logging_with};
