//! Read-only views handed to the presentation layer
//!
//! Nothing here holds a reference into the engine; every value is an owned copy, so a
//! renderer may keep a result around (for example to run a clear animation) while the
//! engine keeps processing requests.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::grid::{CellPos, Grid};
use crate::shapes::Shape;
use crate::types::{
    Cell, LineRef, GRID_CELLS, GRID_SIZE, HAND_SIZE, MAX_LINES_PER_CLEAR, MAX_SHAPE_CELLS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSnapshot {
    pub cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl GridSnapshot {
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE && self.cells[row][col].is_filled()
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_filled())
            .count()
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self {
            cells: grid.to_rows(),
        }
    }
}

/// Outcome of an accepted placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementResult {
    /// Index the block had in the queue when it was placed
    pub block_index: usize,
    pub row: i32,
    pub col: i32,
    /// Cells filled by the block
    pub placed_cells: ArrayVec<CellPos, MAX_SHAPE_CELLS>,
    /// Completed rows then columns, ascending
    pub lines_cleared: ArrayVec<LineRef, MAX_LINES_PER_CLEAR>,
    /// Cells emptied by the clear, each once
    pub cleared_cells: ArrayVec<CellPos, GRID_CELLS>,
    pub points: u32,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    /// The placed block was the last one and a fresh hand was drawn
    pub replenished: bool,
    pub game_over: bool,
    /// Grid after the clear
    pub grid: GridSnapshot,
}

impl PlacementResult {
    pub fn cleared_any(&self) -> bool {
        !self.lines_cleared.is_empty()
    }
}

/// Hover feedback for a block held over the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropPreview {
    /// In-bounds cells the block would cover
    pub cells: ArrayVec<CellPos, GRID_CELLS>,
    pub valid: bool,
}

/// Everything a renderer needs to redraw the board from scratch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub grid: GridSnapshot,
    pub offered: ArrayVec<Shape, HAND_SIZE>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub lines_cleared: u32,
    pub blocks_placed: u32,
}
