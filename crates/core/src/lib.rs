//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the block placement puzzle: the shape catalog, the
//! 8x8 grid, the offered-block queue, scoring, and the engine that ties them together.
//! It performs no I/O and keeps no global state, so any number of engines can run side
//! by side.
//!
//! - **Deterministic**: the same seed produces the same sequence of offered blocks
//! - **Synchronous**: every operation runs to completion before returning
//! - **Zero-allocation hot paths**: placement checks and line scans use fixed arrays
//!
//! # Module Structure
//!
//! - [`shapes`]: shape matrices and the eleven-entry catalog
//! - [`grid`]: occupancy grid, placement checks and line clearing
//! - [`queue`]: the offered blocks, refilled to three when the last one is used
//! - [`scoring`]: flat per-line rewards
//! - [`engine`]: placement requests, game over detection and new games
//! - [`snapshot`]: owned views for the presentation layer
//!
//! # Game Rules
//!
//! - Three blocks are offered at a time; a fresh three are drawn only once all are placed
//! - A block fits when every filled cell lands on an empty cell inside the grid
//! - Every full row and full column is cleared after each placement, 100 points per line
//! - The game is over when no offered block fits anywhere on the grid
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameEngine;
//!
//! let mut game = GameEngine::new(12345);
//! assert_eq!(game.offered_blocks().len(), 3);
//!
//! // Every catalog shape fits in the top-left corner of an empty grid.
//! let result = game.attempt_placement(0, 0, 0).unwrap();
//! assert!(!result.game_over);
//! assert_eq!(game.offered_blocks().len(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod queue;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameEngine, GamePhase};
pub use error::{PlacementError, ShapeError};
pub use grid::{CellPos, Grid};
pub use queue::{Block, BlockQueue};
pub use scoring::{add_points, calculate_line_score};
pub use shapes::{draw_random_kind, draw_random_shape, get_template, Shape};
pub use snapshot::{DropPreview, GameSnapshot, GridSnapshot, PlacementResult};
