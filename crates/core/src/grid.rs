//! Grid module - the 8x8 occupancy matrix
//!
//! Uses a flat array for cache locality and zero-allocation placement checks.
//! Coordinates: `(row, col)`, row 0 at the top, col 0 at the left. Placement offsets
//! are signed so callers may probe positions hanging off any edge.

use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{Cell, LineRef, GRID_CELLS, GRID_SIZE, MAX_LINES_PER_CLEAR};

/// Cell coordinates `(row, col)` as reported to callers
pub type CellPos = (u8, u8);

/// The game grid - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_CELLS],
        }
    }

    /// Build a grid from a boolean matrix (`true` = filled)
    pub fn from_rows(rows: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    grid.cells[r * GRID_SIZE + c] = Cell::Filled;
                }
            }
        }
        grid
    }

    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= GRID_SIZE as i32 || col >= GRID_SIZE as i32 {
            return None;
        }
        Some(row as usize * GRID_SIZE + col as usize)
    }

    /// Target cell of a shape offset, None if it falls off the grid
    #[inline]
    fn target(row: i32, col: i32, dr: usize, dc: usize) -> Option<usize> {
        let r = row.checked_add(dr as i32)?;
        let c = col.checked_add(dc as i32)?;
        Self::index(r, c)
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at `(row, col)`, None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Filled))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_SIZE {
            return false;
        }
        let start = row * GRID_SIZE;
        self.cells[start..start + GRID_SIZE]
            .iter()
            .all(|c| c.is_filled())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= GRID_SIZE {
            return false;
        }
        (0..GRID_SIZE).all(|r| self.cells[r * GRID_SIZE + col].is_filled())
    }

    /// True iff every filled cell of `shape`, offset by `(row, col)`, lands in bounds on
    /// an empty cell. Empty shape cells impose no constraint.
    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        shape
            .filled_offsets()
            .all(|(dr, dc)| match Self::target(row, col, dr, dc) {
                Some(idx) => self.cells[idx].is_empty(),
                None => false,
            })
    }

    /// Fill every cell covered by `shape` at `(row, col)`
    ///
    /// Returns false without touching the grid if the shape does not fit.
    pub fn place(&mut self, shape: &Shape, row: i32, col: i32) -> bool {
        if !self.can_place(shape, row, col) {
            return false;
        }
        for (dr, dc) in shape.filled_offsets() {
            if let Some(idx) = Self::target(row, col, dr, dc) {
                self.cells[idx] = Cell::Filled;
            }
        }
        true
    }

    /// In-bounds target cells of `shape` at `(row, col)`, ignoring occupancy
    pub fn footprint(&self, shape: &Shape, row: i32, col: i32) -> ArrayVec<CellPos, GRID_CELLS> {
        shape
            .filled_offsets()
            .filter_map(|(dr, dc)| Self::target(row, col, dr, dc))
            .map(|idx| ((idx / GRID_SIZE) as u8, (idx % GRID_SIZE) as u8))
            .collect()
    }

    /// Every full row and full column, rows first, each in ascending index order
    pub fn find_completed_lines(&self) -> ArrayVec<LineRef, MAX_LINES_PER_CLEAR> {
        let mut lines = ArrayVec::new();
        for r in 0..GRID_SIZE {
            if self.is_row_full(r) {
                lines.push(LineRef::row(r as u8));
            }
        }
        for c in 0..GRID_SIZE {
            if self.is_col_full(c) {
                lines.push(LineRef::col(c as u8));
            }
        }
        lines
    }

    /// Empty every cell on the referenced lines
    ///
    /// Returns the cells that went from filled to empty, each reported once even where a
    /// row and a column cross. Clearing the same lines again is a no-op.
    pub fn clear_lines(&mut self, lines: &[LineRef]) -> ArrayVec<CellPos, GRID_CELLS> {
        let mut emptied = ArrayVec::new();
        for line in lines {
            if line.index as usize >= GRID_SIZE {
                continue;
            }
            for (r, c) in line.cells() {
                let idx = r * GRID_SIZE + c;
                if self.cells[idx].is_filled() {
                    self.cells[idx] = Cell::Empty;
                    emptied.push((r as u8, c as u8));
                }
            }
        }
        emptied
    }

    /// True iff `shape` fits at any offset
    ///
    /// Offsets start at `1 - height` and `1 - width` so a custom shape padded with empty
    /// leading rows or columns is found wherever its filled cells fit. For shapes whose
    /// top row and left column hold filled cells this is the 64 grid offsets.
    pub fn has_any_valid_placement(&self, shape: &Shape) -> bool {
        let first_row = 1 - shape.height() as i32;
        let first_col = 1 - shape.width() as i32;
        (first_row..GRID_SIZE as i32)
            .any(|row| (first_col..GRID_SIZE as i32).any(|col| self.can_place(shape, row, col)))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one line, in order; empty for an index off the grid
    pub fn line(&self, line: LineRef) -> ArrayVec<Cell, GRID_SIZE> {
        if line.index as usize >= GRID_SIZE {
            return ArrayVec::new();
        }
        line.cells()
            .map(|(r, c)| self.cells[r * GRID_SIZE + c])
            .collect()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; GRID_CELLS];
    }

    /// Convert to a 2D matrix for snapshots and display
    pub fn to_rows(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * GRID_SIZE..(r + 1) * GRID_SIZE]);
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
