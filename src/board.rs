//! Board state: the cell grid, the free-cell index, the ship registry and the
//! lock that reserves a board for a single targeting engine.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{self as core_cell, RefCell};
use core::fmt;
use rand::Rng;

use crate::cell::{Cell, CellState};
use crate::cell_set::CellSet;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BoardConfig;
use crate::segment::Segment;
use crate::ship::{Ship, ShipId};

/// Board handle shared between its owner and an attached targeting engine.
pub type SharedBoard = Rc<RefCell<Board>>;

/// Lock flag shared with the attached engine, so the engine can release it
/// without borrowing the board.
pub(crate) type LockToken = Rc<core_cell::Cell<bool>>;

/// All eight neighbours, row by row.
const AROUND: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Orthogonal neighbours only.
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Directions probed by `candidate_directions`: down, up, right, left.
const DIRECTIONS: [(bool, i32); 4] = [(true, 1), (true, -1), (false, 1), (false, -1)];

pub struct Board {
    config: BoardConfig,
    /// Row-major grid.
    cells: Vec<Cell>,
    /// Always exactly the set of `Empty` cells.
    free: CellSet,
    /// Live ships in insertion order.
    ships: Vec<Ship>,
    next_id: u32,
    locked: LockToken,
}

impl Board {
    /// Empty board with the default 10x10 geometry.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Empty board with the given geometry.
    pub fn with_config(config: BoardConfig) -> Self {
        let mut cells = Vec::with_capacity(config.cell_count());
        for y in 0..config.height {
            for x in 0..config.width {
                cells.push(Cell::new(x as i32, y as i32));
            }
        }
        Board {
            config,
            free: CellSet::full(cells.len()),
            cells,
            ships: Vec::new(),
            next_id: 0,
            locked: Rc::new(core_cell::Cell::new(false)),
        }
    }

    /// Wraps the board in a [`SharedBoard`] handle.
    pub fn into_shared(self) -> SharedBoard {
        Rc::new(RefCell::new(self))
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    /// `true` while a targeting engine is attached.
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub(crate) fn set_locked(&self, locked: bool) {
        self.locked.set(locked);
    }

    pub(crate) fn lock_token(&self) -> LockToken {
        Rc::clone(&self.locked)
    }

    pub(crate) fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.config.width || y >= self.config.height {
            return None;
        }
        Some(y * self.config.width + x)
    }

    pub(crate) fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|idx| &self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Cells whose state is `Empty`, in no particular order.
    pub fn free_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.free.iter().map(|idx| &self.cells[idx])
    }

    pub fn free_cells_count(&self) -> usize {
        self.free.len()
    }

    /// Live ships in insertion order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.ships.iter()
    }

    pub fn ships_count(&self) -> usize {
        self.ships.len()
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id() == id)
    }

    /// Cells owned by `ship`, in segment order.
    pub fn ship_cells<'a>(&'a self, ship: &'a Ship) -> impl Iterator<Item = &'a Cell> + 'a {
        ship.cell_indices().iter().map(|&idx| &self.cells[idx])
    }

    /// Buffer cells `ship` shares in.
    pub fn ship_buffer<'a>(&'a self, ship: &'a Ship) -> impl Iterator<Item = &'a Cell> + 'a {
        ship.buffer_indices().iter().map(|&idx| &self.cells[idx])
    }

    /// `true` when every registered ship is destroyed (vacuously so for an
    /// empty registry).
    pub fn all_ships_destroyed(&self) -> bool {
        self.ships.iter().all(|s| s.is_destroyed(self))
    }

    fn indices_along(&self, segment: &Segment, strict: bool) -> Result<Vec<usize>, BoardError> {
        let mut out = Vec::with_capacity(segment.length().min(self.cells.len()));
        for (x, y) in segment.coords() {
            match self.index_of(x, y) {
                Some(idx) => out.push(idx),
                None if strict => return Err(BoardError::InvalidCoordinates { x, y }),
                None => break,
            }
        }
        Ok(out)
    }

    /// Cells denoted by `segment` in walking order. Fails with
    /// `InvalidCoordinates` on the first coordinate outside the grid.
    pub fn cells_along(&self, segment: &Segment) -> Result<Vec<&Cell>, BoardError> {
        Ok(self
            .indices_along(segment, true)?
            .into_iter()
            .map(|idx| &self.cells[idx])
            .collect())
    }

    /// Like [`Board::cells_along`], but stops at the first coordinate outside
    /// the grid and returns the valid prefix.
    pub fn cells_along_lenient(&self, segment: &Segment) -> Vec<&Cell> {
        self.indices_along(segment, false)
            .unwrap_or_default()
            .into_iter()
            .map(|idx| &self.cells[idx])
            .collect()
    }

    pub(crate) fn around_indices(
        &self,
        x: i32,
        y: i32,
        exclude: Option<(i32, i32)>,
    ) -> impl Iterator<Item = usize> + '_ {
        AROUND.iter().filter_map(move |&(dx, dy)| {
            let next = (x.checked_add(dx)?, y.checked_add(dy)?);
            if Some(next) == exclude {
                return None;
            }
            self.index_of(next.0, next.1)
        })
    }

    pub(crate) fn directional_indices(&self, x: i32, y: i32) -> impl Iterator<Item = usize> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dx, dy)| self.index_of(x.checked_add(dx)?, y.checked_add(dy)?))
    }

    /// The up-to-eight neighbours of `(x, y)`, skipping `exclude` if given.
    pub fn cells_around(&self, x: i32, y: i32, exclude: Option<(i32, i32)>) -> Vec<&Cell> {
        self.around_indices(x, y, exclude)
            .map(|idx| &self.cells[idx])
            .collect()
    }

    /// The up-to-four orthogonal neighbours of `(x, y)`.
    pub fn directional_cells_around(&self, x: i32, y: i32) -> Vec<&Cell> {
        self.directional_indices(x, y)
            .map(|idx| &self.cells[idx])
            .collect()
    }

    /// For each orthogonal direction from `(x, y)` (down, up, right, left),
    /// the run of contiguous `Empty` cells starting next to `(x, y)`, at most
    /// `max_len` long. Directions with an empty run are left out.
    pub fn candidate_directions(&self, x: i32, y: i32, max_len: usize) -> Vec<Segment> {
        let mut out = Vec::new();
        let limit = max_len.min(self.width().max(self.height()));
        if limit == 0 {
            return out;
        }
        for (vertical, step) in DIRECTIONS {
            let (fixed, pos) = if vertical { (x, y) } else { (y, x) };
            let (Some(start), Some(far)) = (
                pos.checked_add(step),
                pos.checked_add(step * limit as i32),
            ) else {
                continue;
            };
            let probe = Segment::new(fixed, start, far, vertical);
            let run = self
                .cells_along_lenient(&probe)
                .iter()
                .take_while(|c| c.is_empty())
                .count();
            if run > 0 {
                out.push(probe.truncated(run));
            }
        }
        out
    }

    /// Places a ship on `segment`.
    ///
    /// The whole segment and its buffer zone are validated before anything
    /// changes, so a rejected placement leaves the board untouched.
    pub fn add_ship(&mut self, segment: Segment) -> Result<ShipId, BoardError> {
        if self.is_locked() {
            return Err(BoardError::FieldLocked);
        }

        let along = self.indices_along(&segment, true)?;
        let mut owned = Vec::with_capacity(along.len());
        let mut buffer = Vec::new();
        let mut previous = None;
        for idx in along {
            let cell = &self.cells[idx];
            if cell.is_occupied() {
                return Err(BoardError::CellOccupied {
                    x: cell.x(),
                    y: cell.y(),
                });
            }
            for n in self.around_indices(cell.x(), cell.y(), previous) {
                let neighbour = &self.cells[n];
                if neighbour.is_occupied() {
                    return Err(BoardError::CellOccupied {
                        x: neighbour.x(),
                        y: neighbour.y(),
                    });
                }
                buffer.push(n);
            }
            owned.push(idx);
            previous = Some(cell.coords());
        }
        buffer.sort_unstable();
        buffer.dedup();
        buffer.retain(|idx| !owned.contains(idx));

        let id = ShipId(self.next_id);
        self.next_id += 1;
        for &idx in &owned {
            self.cells[idx].set_owner(Some(id));
            self.sync_free(idx);
        }
        for &idx in &buffer {
            self.cells[idx].relate(id);
            self.sync_free(idx);
        }
        log::debug!(
            "placed ship {} on {:?} ({} cells, {} buffer)",
            id,
            segment,
            owned.len(),
            buffer.len()
        );
        self.ships.push(Ship::new(id, segment, owned, buffer));
        Ok(id)
    }

    /// Removes a ship and releases its cells. Returns `false` if no ship with
    /// this id is registered.
    pub fn remove_ship(&mut self, id: ShipId) -> Result<bool, BoardError> {
        if self.is_locked() {
            return Err(BoardError::FieldLocked);
        }
        let Some(pos) = self.ships.iter().position(|s| s.id() == id) else {
            return Ok(false);
        };
        let ship = self.ships.remove(pos);
        self.release(&ship);
        log::debug!("removed ship {}", id);
        Ok(true)
    }

    /// Removes every ship.
    pub fn clear_ships(&mut self) -> Result<(), BoardError> {
        if self.is_locked() {
            return Err(BoardError::FieldLocked);
        }
        let ships = core::mem::take(&mut self.ships);
        for ship in ships.iter().rev() {
            self.release(ship);
        }
        Ok(())
    }

    /// Removes every ship and clears all shot and mark flags.
    pub fn reset(&mut self) -> Result<(), BoardError> {
        self.clear_ships()?;
        for cell in &mut self.cells {
            cell.reset_flags();
        }
        Ok(())
    }

    fn release(&mut self, ship: &Ship) {
        let id = ship.id();
        for &idx in ship.cell_indices() {
            self.cells[idx].set_owner(None);
            self.sync_free(idx);
        }
        for &idx in ship.buffer_indices() {
            self.cells[idx].unrelate(id);
            self.sync_free(idx);
        }
    }

    fn sync_free(&mut self, idx: usize) {
        if self.cells[idx].state() == CellState::Empty {
            self.free.insert(idx);
        } else {
            self.free.remove(idx);
        }
    }

    /// Marks `(x, y)` as shot. Shooting a cell twice is not an error.
    pub fn shoot(&mut self, x: i32, y: i32) -> Option<&Cell> {
        let idx = self.index_of(x, y)?;
        self.cells[idx].shoot();
        Some(&self.cells[idx])
    }

    pub(crate) fn shoot_index(&mut self, idx: usize) -> ShotOutcome {
        self.cells[idx].shoot();
        self.outcome_of(idx)
    }

    /// What a shot at `(x, y)` reports given the board's current state.
    pub fn outcome_at(&self, x: i32, y: i32) -> Option<ShotOutcome> {
        self.index_of(x, y).map(|idx| self.outcome_of(idx))
    }

    fn outcome_of(&self, idx: usize) -> ShotOutcome {
        match self.cells[idx].owner() {
            None => ShotOutcome::Miss,
            Some(id) => match self.ship(id) {
                Some(ship) if ship.is_destroyed(self) => ShotOutcome::Sunk(id),
                _ => ShotOutcome::Hit(id),
            },
        }
    }

    /// Highlights `(x, y)` for rendering.
    pub fn mark(&mut self, x: i32, y: i32) -> Option<&Cell> {
        let idx = self.index_of(x, y)?;
        self.cells[idx].mark();
        Some(&self.cells[idx])
    }

    /// Uniformly random `Empty` cell, `None` when there are none.
    pub fn random_free_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Cell> {
        self.free.choose(rng).map(|idx| &self.cells[idx])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  size: {}x{},\n  locked: {},\n  free: {},\n  ships: {:?}\n}}",
            self.config.width,
            self.config.height,
            self.locked.get(),
            self.free.len(),
            self.ships
        )
    }
}
