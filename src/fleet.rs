//! Random fleet generation on top of the board's placement API.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{ShipClass, FLEET_RETRIES, PLACEMENT_ATTEMPTS, STANDARD_FLEET};

/// Places `fleet` on `board`, largest classes first as listed.
///
/// For every ship a random free cell is drawn and the legal runs leading away
/// from it are collected; one run long enough for the ship is picked at random
/// and cut to size. Draws that find no such run are retried.
///
/// Fails with `OutOfFreeCells` when a draw finds no free cell, and with
/// `FleetUnplaceable` when `PLACEMENT_ATTEMPTS` draws in a row produce no
/// legal run. Ships placed before a failure stay on the board.
pub fn fill<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[ShipClass],
    rng: &mut R,
) -> Result<(), BoardError> {
    for class in fleet {
        let size = class.size();
        for _ in 0..class.count() {
            place_one(board, size, rng)?;
        }
    }
    Ok(())
}

fn place_one<R: Rng + ?Sized>(
    board: &mut Board,
    size: usize,
    rng: &mut R,
) -> Result<(), BoardError> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let (x, y) = board
            .random_free_cell(rng)
            .ok_or(BoardError::OutOfFreeCells)?
            .coords();
        let runs: Vec<_> = board
            .candidate_directions(x, y, size)
            .into_iter()
            .filter(|s| s.length() >= size)
            .collect();
        if runs.is_empty() {
            continue;
        }
        let segment = runs[rng.random_range(0..runs.len())].truncated(size);
        board.add_ship(segment)?;
        return Ok(());
    }
    Err(BoardError::FleetUnplaceable { size })
}

/// Resets `board` and places the standard fleet on it.
///
/// A fleet that jams (`FleetUnplaceable`) is thrown away and generated again,
/// up to `FLEET_RETRIES` times. Any other error is returned immediately.
pub fn reset_and_fill<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    reset_and_fill_with(board, &STANDARD_FLEET, rng)
}

/// [`reset_and_fill`] with a custom fleet.
pub fn reset_and_fill_with<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[ShipClass],
    rng: &mut R,
) -> Result<(), BoardError> {
    let mut last = BoardError::FleetUnplaceable { size: 0 };
    for attempt in 0..FLEET_RETRIES {
        board.reset()?;
        match fill(board, fleet, rng) {
            Ok(()) => return Ok(()),
            Err(err @ BoardError::FleetUnplaceable { .. }) => {
                log::warn!("fleet attempt {} jammed: {}", attempt + 1, err);
                last = err;
            }
            Err(err) => return Err(err),
        }
    }
    Err(last)
}
