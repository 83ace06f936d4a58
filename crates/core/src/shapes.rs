//! Shapes module - block shape matrices and the shape catalog
//!
//! A shape is a rectangular, row-major boolean matrix with at least one filled cell.
//! The catalog holds eleven fixed templates; every draw builds a fresh owned `Shape`,
//! so mutating or dropping one offered block never affects another or the catalog.

use arrayvec::ArrayVec;
use rand::Rng;
use serde::Serialize;

use crate::error::ShapeError;
use crate::types::{ShapeKind, GRID_SIZE, MAX_SHAPE_CELLS};

/// Row-major template, `1` filled, `0` empty
pub type ShapeTemplate = &'static [&'static [u8]];

/// Get the catalog template for a shape kind
pub fn get_template(kind: ShapeKind) -> ShapeTemplate {
    match kind {
        ShapeKind::Single => &[&[1]],
        ShapeKind::DominoH => &[&[1, 1]],
        ShapeKind::DominoV => &[&[1], &[1]],
        ShapeKind::TriominoH => &[&[1, 1, 1]],
        ShapeKind::TriominoV => &[&[1], &[1], &[1]],
        ShapeKind::Square => &[&[1, 1], &[1, 1]],
        ShapeKind::LineH4 => &[&[1, 1, 1, 1]],
        ShapeKind::ElbowLeft => &[&[1, 1, 1], &[1, 0, 0]],
        ShapeKind::ElbowRight => &[&[1, 1, 1], &[0, 0, 1]],
        ShapeKind::ElbowTall => &[&[1, 1], &[1, 0], &[1, 0]],
        ShapeKind::Tee => &[&[1, 1, 1], &[0, 1, 0]],
    }
}

/// Pick a catalog kind uniformly at random
pub fn draw_random_kind<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())]
}

/// Draw an independent copy of a uniformly chosen catalog shape
pub fn draw_random_shape<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    Shape::from_kind(draw_random_kind(rng))
}

/// A block shape: rectangular boolean matrix, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    height: u8,
    width: u8,
    /// Flat row-major cells (r * width + c)
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build the shape for a catalog kind
    pub fn from_kind(kind: ShapeKind) -> Self {
        let template = get_template(kind);
        let mut cells = ArrayVec::new();
        for row in template {
            for &c in row.iter() {
                cells.push(c != 0);
            }
        }
        Self {
            height: template.len() as u8,
            width: template[0].len() as u8,
            cells,
        }
    }

    /// Build a custom shape from rows of booleans
    ///
    /// Rows must be non-empty, equally long, no larger than the grid, and contain at
    /// least one filled cell.
    pub fn from_rows<T: AsRef<[bool]>>(rows: &[T]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if height > GRID_SIZE || width > GRID_SIZE {
            return Err(ShapeError::TooLarge {
                height,
                width,
                max: GRID_SIZE,
            });
        }

        let mut cells = ArrayVec::new();
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(ShapeError::Ragged {
                    row,
                    len: r.len(),
                    expected: width,
                });
            }
            cells.extend(r.iter().copied());
        }
        if !cells.iter().any(|&c| c) {
            return Err(ShapeError::NoFilledCells);
        }

        Ok(Self {
            height: height as u8,
            width: width as u8,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Whether the cell at `(row, col)` of the matrix is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width() && self.cells[row * self.width() + col]
    }

    /// Offsets `(row, col)` of every filled cell, row-major
    pub fn filled_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Matrix as nested rows, for presentation
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width())
            .map(|row| row.to_vec())
            .collect()
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Shape::from_kind(kind)
    }
}
