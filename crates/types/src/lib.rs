//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the session layer and any
//! presentation layer built on top of them. Everything here is plain data: no game
//! rules, no randomness, no I/O.
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 8 x 8 cells (rows and columns indexed 0-7)
//! - **Coordinates**: `(row, col)`, row 0 is the top, col 0 is the left edge
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 8 | Rows and columns of the grid |
//! | `HAND_SIZE` | 3 | Blocks offered after every refill |
//! | `POINTS_PER_LINE` | 100 | Flat reward per cleared row or column |
//! | `MAX_LINES_PER_CLEAR` | 16 | Every row plus every column |
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{Axis, LineRef, ShapeKind, GRID_SIZE};
//!
//! let kind = ShapeKind::from_str("tee").unwrap();
//! assert_eq!(kind, ShapeKind::Tee);
//!
//! let line = LineRef::row(3);
//! assert_eq!(line.axis, Axis::Row);
//!
//! assert_eq!(GRID_SIZE, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Grid side length in cells (8 rows, 8 columns)
pub const GRID_SIZE: usize = 8;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Number of blocks offered to the player after every refill
pub const HAND_SIZE: usize = 3;

/// Points awarded per cleared line, independent of block size or combos
pub const POINTS_PER_LINE: u32 = 100;

/// Upper bound on lines completed by a single placement (all rows + all columns)
pub const MAX_LINES_PER_CLEAR: usize = 2 * GRID_SIZE;

/// Largest number of cells a shape matrix may hold (a full grid)
pub const MAX_SHAPE_CELLS: usize = GRID_CELLS;

/// Storage key the high score is persisted under
pub const HIGH_SCORE_KEY: &str = "blockBlastHighScore";

/// A single grid cell. Exactly one of two states, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Orientation of a line on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Col => "col",
        }
    }
}

/// Reference to a full row or a full column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineRef {
    pub axis: Axis,
    pub index: u8,
}

impl LineRef {
    pub fn row(index: u8) -> Self {
        Self {
            axis: Axis::Row,
            index,
        }
    }

    pub fn col(index: u8) -> Self {
        Self {
            axis: Axis::Col,
            index,
        }
    }

    /// Grid coordinates `(row, col)` covered by this line, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::LineRef;
    ///
    /// let cells: Vec<_> = LineRef::col(2).cells().collect();
    /// assert_eq!(cells.len(), 8);
    /// assert_eq!(cells[0], (0, 2));
    /// assert_eq!(cells[7], (7, 2));
    /// ```
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let axis = self.axis;
        let index = self.index as usize;
        (0..GRID_SIZE).map(move |i| match axis {
            Axis::Row => (index, i),
            Axis::Col => (i, index),
        })
    }
}

/// The eleven shapes of the block catalog
///
/// Matrices are row-major, `#` filled, `.` empty:
///
/// | Kind | Matrix |
/// |------|--------|
/// | `Single` | `#` |
/// | `DominoH` | `##` |
/// | `DominoV` | `#/#` |
/// | `TriominoH` | `###` |
/// | `TriominoV` | `#/#/#` |
/// | `Square` | `##/##` |
/// | `LineH4` | `####` |
/// | `ElbowLeft` | `###/#..` |
/// | `ElbowRight` | `###/..#` |
/// | `ElbowTall` | `##/#./#.` |
/// | `Tee` | `###/.#.` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Single,
    DominoH,
    DominoV,
    TriominoH,
    TriominoV,
    Square,
    LineH4,
    ElbowLeft,
    ElbowRight,
    ElbowTall,
    Tee,
}

impl ShapeKind {
    /// Every catalog entry, in catalog order.
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Single,
        ShapeKind::DominoH,
        ShapeKind::DominoV,
        ShapeKind::TriominoH,
        ShapeKind::TriominoV,
        ShapeKind::Square,
        ShapeKind::LineH4,
        ShapeKind::ElbowLeft,
        ShapeKind::ElbowRight,
        ShapeKind::ElbowTall,
        ShapeKind::Tee,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("LineH4"), Some(ShapeKind::LineH4));
    /// assert_eq!(ShapeKind::from_str("pentomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(ShapeKind::Single),
            "dominoh" => Some(ShapeKind::DominoH),
            "dominov" => Some(ShapeKind::DominoV),
            "triominoh" => Some(ShapeKind::TriominoH),
            "triominov" => Some(ShapeKind::TriominoV),
            "square" => Some(ShapeKind::Square),
            "lineh4" => Some(ShapeKind::LineH4),
            "elbowleft" => Some(ShapeKind::ElbowLeft),
            "elbowright" => Some(ShapeKind::ElbowRight),
            "elbowtall" => Some(ShapeKind::ElbowTall),
            "tee" => Some(ShapeKind::Tee),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::DominoH => "dominoH",
            ShapeKind::DominoV => "dominoV",
            ShapeKind::TriominoH => "triominoH",
            ShapeKind::TriominoV => "triominoV",
            ShapeKind::Square => "square",
            ShapeKind::LineH4 => "lineH4",
            ShapeKind::ElbowLeft => "elbowLeft",
            ShapeKind::ElbowRight => "elbowRight",
            ShapeKind::ElbowTall => "elbowTall",
            ShapeKind::Tee => "tee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(GRID_SIZE, 8);
        assert_eq!(GRID_CELLS, 64);
        assert_eq!(HAND_SIZE, 3);
        assert_eq!(POINTS_PER_LINE, 100);
        assert_eq!(MAX_LINES_PER_CLEAR, 16);
    }

    #[test]
    fn shape_kind_str_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn line_ref_cells_cover_one_line() {
        let row: Vec<_> = LineRef::row(5).cells().collect();
        assert!(row.iter().all(|&(r, _)| r == 5));
        assert_eq!(row.last(), Some(&(5, 7)));
    }

    #[test]
    fn cell_defaults_to_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::Filled.is_filled());
        assert!(!Cell::Filled.is_empty());
    }
}
