//! Engine module - placement, line clears, scoring and game over
//!
//! The engine owns the grid, the block queue and the score. Every request runs to
//! completion before returning: a placement is validated, applied, cleared, scored,
//! replenished and checked for game over in one call, and the returned
//! [`PlacementResult`] describes the final state. Presentation code may delay showing
//! the clear, but the engine state is already authoritative.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::queue::{Block, BlockQueue};
use crate::scoring::{add_points, calculate_line_score};
use crate::snapshot::{DropPreview, GameSnapshot, GridSnapshot, PlacementResult};

/// Observable engine phase
///
/// A placement in progress is never observable since `attempt_placement` is synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Waiting for a placement request
    Idle,
    /// No offered block fits anywhere; only `new_game` leaves this phase
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    grid: Grid,
    queue: BlockQueue<R>,
    score: u32,
    high_score: u32,
    /// Lines cleared in the current game
    lines_cleared: u32,
    /// Blocks placed in the current game
    blocks_placed: u32,
    phase: GamePhase,
}

impl GameEngine<StdRng> {
    /// Create a deterministic engine: the same seed yields the same blocks
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an engine drawing blocks from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with an empty grid and a fresh hand drawn from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::from_parts(Grid::new(), BlockQueue::new(rng), 0)
    }

    /// Resume from an existing grid, queue and score
    pub fn from_parts(grid: Grid, queue: BlockQueue<R>, score: u32) -> Self {
        let mut engine = Self {
            grid,
            queue,
            score,
            high_score: score,
            lines_cleared: 0,
            blocks_placed: 0,
            phase: GamePhase::Idle,
        };
        engine.update_phase();
        engine
    }

    /// Seed the best score known from earlier sessions
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.set_high_score(high_score);
        self
    }

    /// Replace the high score; it never drops below the current score
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score.max(self.score);
    }

    /// Start over: empty grid, zero score, fresh hand
    ///
    /// Works from any phase, including game over. The high score is kept.
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.queue.reset();
        self.score = 0;
        self.lines_cleared = 0;
        self.blocks_placed = 0;
        self.phase = GamePhase::Idle;
        info!(high_score = self.high_score, "new game");
    }

    /// Place the offered block at `block_index` with its top-left corner on `(row, col)`
    ///
    /// On success the block leaves the queue (refilling it if it was the last one),
    /// completed lines are cleared and scored, and game over is evaluated against the
    /// resulting queue. On error nothing changes. Once the game is over every request is
    /// rejected with `InvalidPlacement` until `new_game`.
    pub fn attempt_placement(
        &mut self,
        block_index: usize,
        row: i32,
        col: i32,
    ) -> Result<PlacementResult, PlacementError> {
        let block = self
            .queue
            .get(block_index)
            .ok_or(PlacementError::InvalidBlockIndex {
                index: block_index,
                len: self.queue.len(),
            })?;

        if self.is_game_over() || !self.grid.can_place(block.shape(), row, col) {
            trace!(block_index, row, col, "placement rejected");
            return Err(PlacementError::InvalidPlacement {
                index: block_index,
                row,
                col,
            });
        }

        let replenished = self.queue.len() == 1;
        let block = self
            .queue
            .take(block_index)
            .ok_or(PlacementError::InvalidBlockIndex {
                index: block_index,
                len: self.queue.len(),
            })?;

        let placed_cells = self.grid.footprint(block.shape(), row, col);
        let placed = self.grid.place(block.shape(), row, col);
        debug_assert!(placed, "validated placement must apply");
        self.blocks_placed = self.blocks_placed.saturating_add(1);

        let lines_cleared = self.grid.find_completed_lines();
        let cleared_cells = self.grid.clear_lines(&lines_cleared);
        let points = calculate_line_score(lines_cleared.len());
        self.score = add_points(self.score, points);
        self.lines_cleared = self
            .lines_cleared
            .saturating_add(lines_cleared.len() as u32);

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            info!(high_score = self.high_score, "new high score");
        }

        self.update_phase();
        let game_over = self.is_game_over();
        if game_over {
            info!(
                score = self.score,
                blocks_placed = self.blocks_placed,
                "game over"
            );
        }

        debug!(
            block_index,
            row,
            col,
            lines = lines_cleared.len(),
            score = self.score,
            "block placed"
        );

        Ok(PlacementResult {
            block_index,
            row,
            col,
            placed_cells,
            lines_cleared,
            cleared_cells,
            points,
            score: self.score,
            high_score: self.high_score,
            new_high_score,
            replenished,
            game_over,
            grid: GridSnapshot::from(&self.grid),
        })
    }

    /// Read-only probe: would the offered block at `block_index` fit at `(row, col)`?
    pub fn can_place(&self, block_index: usize, row: i32, col: i32) -> bool {
        self.queue
            .get(block_index)
            .is_some_and(|b| self.grid.can_place(b.shape(), row, col))
    }

    /// Hover feedback for dragging the block at `block_index` over `(row, col)`
    pub fn preview(&self, block_index: usize, row: i32, col: i32) -> Option<DropPreview> {
        let block = self.queue.get(block_index)?;
        Some(DropPreview {
            cells: self.grid.footprint(block.shape(), row, col),
            valid: self.grid.can_place(block.shape(), row, col),
        })
    }

    fn update_phase(&mut self) {
        let any_fits = self
            .queue
            .peek()
            .iter()
            .any(|b| self.grid.has_any_valid_placement(b.shape()));
        self.phase = if any_fits {
            GamePhase::Idle
        } else {
            GamePhase::GameOver
        };
    }

    pub fn offered_blocks(&self) -> &[Block] {
        self.queue.peek()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn blocks_placed(&self) -> u32 {
        self.blocks_placed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: GridSnapshot::from(&self.grid),
            offered: self
                .queue
                .peek()
                .iter()
                .map(|b| b.shape().clone())
                .collect(),
            score: self.score,
            high_score: self.high_score,
            game_over: self.is_game_over(),
            lines_cleared: self.lines_cleared,
            blocks_placed: self.blocks_placed,
        }
    }
}
