//! Error types returned by the engine and shape construction

use thiserror::Error;

/// Why a placement request was rejected. No state is mutated in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Caller bug: the index does not address an offered block.
    #[error("block index {index} is out of range ({len} blocks offered)")]
    InvalidBlockIndex { index: usize, len: usize },

    /// The block does not fit at the requested offset (out of bounds or overlapping).
    #[error("block {index} does not fit at row {row}, col {col}")]
    InvalidPlacement { index: usize, row: i32, col: i32 },
}

/// Why a custom shape matrix was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows or no columns")]
    Empty,

    #[error("shape row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("shape has no filled cells")]
    NoFilledCells,

    #[error("shape is {height}x{width}, larger than the {max}x{max} grid")]
    TooLarge {
        height: usize,
        width: usize,
        max: usize,
    },
}
