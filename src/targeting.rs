//! Emulated opponent that shoots at a board.
//!
//! The engine hunts by shooting uniformly random candidate cells. Once it hits
//! a ship that survives the shot it tracks that ship: first probing the
//! orthogonal neighbours of the hit, then, once a second hit fixes the axis,
//! walking along it and bouncing back to the far side of the first hit when
//! the line runs out. When a ship sinks its buffer zone is dropped from the
//! candidate pool, since no ship can lie there.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::{Board, LockToken, SharedBoard};
use crate::cell_set::CellSet;
use crate::common::{BoardError, Shot, ShotOutcome};
use crate::fleet;
use crate::ship::ShipId;

/// A ship that has been hit but not sunk yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetContext {
    origin: (i32, i32),
    last: (i32, i32),
}

impl TargetContext {
    fn new(cell: (i32, i32)) -> Self {
        Self {
            origin: cell,
            last: cell,
        }
    }

    /// First confirmed hit on the ship.
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    /// Most recent confirmed hit on the ship.
    pub fn last(&self) -> (i32, i32) {
        self.last
    }

    /// `true` once a second hit has fixed the ship's axis.
    pub fn has_axis(&self) -> bool {
        self.origin != self.last
    }
}

/// What the next shot will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunt,
    Track(TargetContext),
}

/// Targeting engine attached to exactly one opponent board, which it keeps
/// locked until it switches away or is dropped.
pub struct TargetingEngine {
    own: Board,
    opponent: SharedBoard,
    /// The opponent's lock flag, released on switch or drop.
    opponent_lock: LockToken,
    /// Opponent cells not yet ruled out.
    pool: CellSet,
    targets: VecDeque<TargetContext>,
}

impl TargetingEngine {
    /// Attaches to `opponent` and locks it. The engine's own board is filled
    /// with a random fleet drawn from `rng` and locked as well.
    ///
    /// # Panics
    ///
    /// Panics if `opponent` is mutably borrowed.
    pub fn attach<R: Rng + ?Sized>(
        opponent: SharedBoard,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if opponent.borrow().is_locked() {
            return Err(BoardError::FieldLocked);
        }
        let mut own = Board::new();
        fleet::reset_and_fill(&mut own, rng)?;
        own.set_locked(true);

        let (opponent_lock, pool) = lock(&opponent.borrow());
        log::debug!("engine attached to a {} cell board", pool.len());
        Ok(Self {
            own,
            opponent,
            opponent_lock,
            pool,
            targets: VecDeque::new(),
        })
    }

    /// Releases the current opponent and attaches to `board`, starting over in
    /// hunt mode. Fails with `FieldLocked`, changing nothing, if `board` is
    /// already locked (including when it is the current opponent).
    ///
    /// # Panics
    ///
    /// Panics if `board` is mutably borrowed.
    pub fn switch_opponent(&mut self, board: SharedBoard) -> Result<(), BoardError> {
        let (token, pool) = {
            let next = board.borrow();
            if next.is_locked() {
                return Err(BoardError::FieldLocked);
            }
            lock(&next)
        };
        self.opponent_lock.set(false);
        self.opponent_lock = token;
        self.pool = pool;
        self.opponent = board;
        self.targets.clear();
        log::debug!("engine switched to a {} cell board", self.pool.len());
        Ok(())
    }

    /// The engine's own, locked board.
    pub fn own_board(&self) -> &Board {
        &self.own
    }

    pub fn opponent(&self) -> &SharedBoard {
        &self.opponent
    }

    pub fn mode(&self) -> Mode {
        match self.targets.front() {
            Some(target) => Mode::Track(*target),
            None => Mode::Hunt,
        }
    }

    /// Ship currently being tracked, if any.
    pub fn target(&self) -> Option<TargetContext> {
        self.targets.front().copied()
    }

    /// Number of opponent cells still considered worth shooting.
    pub fn remaining_candidates(&self) -> usize {
        self.pool.len()
    }

    /// Fires one shot at the opponent.
    ///
    /// Returns `Ok(None)` only when no candidate cells remain, which happens
    /// once the opponent's whole fleet is sunk and every other open cell has
    /// been shot. `Impossible` signals a broken invariant; the engine should
    /// not be used after it.
    ///
    /// # Panics
    ///
    /// Panics if the opponent board is borrowed elsewhere.
    pub fn shoot_opponent<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Shot>, BoardError> {
        match self.targets.front().copied() {
            Some(target) => self.track(target, rng).map(Some),
            None => self.hunt(rng),
        }
    }

    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<Shot>, BoardError> {
        let Some(idx) = self.pool.choose(rng) else {
            return Ok(None);
        };
        let mut board = self.opponent.borrow_mut();
        let outcome = board.shoot_index(idx);
        self.pool.remove(idx);
        let (x, y) = board.cell(idx).coords();

        match outcome {
            ShotOutcome::Miss => {}
            ShotOutcome::Hit(_) => self.targets.push_back(TargetContext::new((x, y))),
            ShotOutcome::Sunk(id) => prune_buffer(&mut self.pool, &board, id)?,
        }
        log::trace!("hunt shot ({}, {}): {:?}", x, y, outcome);
        Ok(Some(Shot { x, y, outcome }))
    }

    fn track<R: Rng + ?Sized>(
        &mut self,
        target: TargetContext,
        rng: &mut R,
    ) -> Result<Shot, BoardError> {
        let mut board = self.opponent.borrow_mut();
        let (ox, oy) = target.origin;
        let (lx, ly) = target.last;

        let pursued = board
            .at(ox, oy)
            .and_then(|c| c.owner())
            .ok_or(BoardError::Impossible("tracked origin holds no ship"))?;

        let mut candidates: Vec<usize> = board
            .directional_indices(lx, ly)
            .filter(|&idx| self.pool.contains(idx))
            .collect();

        if target.has_axis() {
            let vertical = ox == lx;
            candidates.retain(|&idx| {
                let cell = board.cell(idx);
                if vertical {
                    cell.x() == lx
                } else {
                    cell.y() == ly
                }
            });
            if candidates.is_empty() {
                // The line ended on this side; continue past the origin.
                let (rx, ry) = if vertical {
                    (ox, oy + if oy < ly { -1 } else { 1 })
                } else {
                    (ox + if ox < lx { -1 } else { 1 }, oy)
                };
                let idx = board
                    .index_of(rx, ry)
                    .filter(|&idx| self.pool.contains(idx))
                    .ok_or(BoardError::Impossible("no open cell beyond the origin"))?;
                candidates.push(idx);
            }
        }
        if candidates.is_empty() {
            return Err(BoardError::Impossible("tracked ship has no open neighbour"));
        }

        let idx = candidates[rng.random_range(0..candidates.len())];
        let outcome = board.shoot_index(idx);
        self.pool.remove(idx);
        let (x, y) = board.cell(idx).coords();

        match outcome {
            ShotOutcome::Miss => {}
            ShotOutcome::Hit(id) if id == pursued => {
                if let Some(front) = self.targets.front_mut() {
                    front.last = (x, y);
                }
            }
            ShotOutcome::Sunk(id) if id == pursued => {
                self.targets.pop_front();
                prune_buffer(&mut self.pool, &board, id)?;
            }
            _ => return Err(BoardError::Impossible("tracking shot hit another ship")),
        }
        log::trace!("track shot ({}, {}): {:?}", x, y, outcome);
        Ok(Shot { x, y, outcome })
    }
}

impl Drop for TargetingEngine {
    fn drop(&mut self) {
        self.opponent_lock.set(false);
    }
}

fn lock(board: &Board) -> (LockToken, CellSet) {
    board.set_locked(true);
    (board.lock_token(), CellSet::full(board.config().cell_count()))
}

fn prune_buffer(pool: &mut CellSet, board: &Board, id: ShipId) -> Result<(), BoardError> {
    let ship = board
        .ship(id)
        .ok_or(BoardError::Impossible("sunk ship is not registered"))?;
    for &idx in ship.buffer_indices() {
        pool.remove(idx);
    }
    Ok(())
}
