//! Plain-text board view.
//!
//! One line per row, top row first:
//! `.` empty, `+` buffer zone, ship size digit for an unshot ship cell,
//! `x` shot ship cell, `o` shot cell without a ship, `*` marked cell.

use alloc::string::String;
use core::fmt;

use crate::board::Board;
use crate::cell::{Cell, CellState};

/// Renders `board` as text, rows separated by `\n` without a trailing newline.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity((board.width() + 1) * board.height());
    for cell in board.cells() {
        if cell.x() == 0 && cell.y() != 0 {
            out.push('\n');
        }
        out.push(cell_glyph(board, cell));
    }
    out
}

fn cell_glyph(board: &Board, cell: &Cell) -> char {
    if cell.is_marked() {
        return '*';
    }
    match (cell.state(), cell.is_shot()) {
        (CellState::Occupied, true) => 'x',
        (CellState::Occupied, false) => cell
            .owner()
            .and_then(|id| board.ship(id))
            .and_then(|ship| char::from_digit(ship.size() as u32, 36))
            .unwrap_or('#'),
        (_, true) => 'o',
        (CellState::Buffer, false) => '+',
        (CellState::Empty, false) => '.',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
