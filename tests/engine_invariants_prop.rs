//! Property tests for the placement pipeline
//!
//! Seeded rollouts exercise the engine end to end and check the invariants that hold
//! regardless of which move is chosen:
//! - an accepted placement scores exactly 100 per cleared line
//! - no completed line survives a placement
//! - the queue always offers between one and three blocks
//! - the game-over flag matches a brute-force search for a legal move, custom shapes
//!   with empty leading rows or columns included
//! - clearing the same lines twice is a no-op
use block_blast::core::{Block, BlockQueue, GameEngine, Grid, Shape};
use block_blast::types::{Cell, GRID_SIZE, HAND_SIZE, POINTS_PER_LINE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Every accepted `(block, row, col)`, including offsets that hang empty shape cells off
/// the top or left edge
fn legal_moves(engine: &GameEngine) -> Vec<(usize, i32, i32)> {
    let mut moves = Vec::new();
    for (index, block) in engine.offered_blocks().iter().enumerate() {
        let shape = block.shape();
        for row in -(shape.height() as i32)..GRID_SIZE as i32 {
            for col in -(shape.width() as i32)..GRID_SIZE as i32 {
                if engine.can_place(index, row, col) {
                    moves.push((index, row, col));
                }
            }
        }
    }
    moves
}

fn custom_shape() -> impl Strategy<Value = Shape> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(h, w)| {
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), w), h)
        })
        .prop_filter_map("no filled cell", |rows| Shape::from_rows(rows.as_slice()).ok())
}

fn dense_rows() -> impl Strategy<Value = [[bool; GRID_SIZE]; GRID_SIZE]> {
    // Mostly filled grids so game over is actually reached
    proptest::array::uniform8(proptest::array::uniform8(proptest::bool::weighted(0.85)))
}

proptest! {
    #[test]
    fn rollout_respects_core_invariants(seed in any::<u64>(), steps in 1usize..60) {
        let mut engine = GameEngine::new(seed);

        for i in 0..steps {
            let moves = legal_moves(&engine);
            prop_assert_eq!(engine.is_game_over(), moves.is_empty());
            if moves.is_empty() {
                break;
            }

            let (index, row, col) = moves[(seed as usize).wrapping_add(i * 17) % moves.len()];
            let before = engine.clone();
            let result = engine.attempt_placement(index, row, col).unwrap();

            let lines = result.lines_cleared.len() as u32;
            prop_assert_eq!(result.points, POINTS_PER_LINE * lines);
            prop_assert_eq!(engine.score(), before.score() + POINTS_PER_LINE * lines);
            prop_assert!(engine.high_score() >= engine.score());
            prop_assert!(engine.grid().find_completed_lines().is_empty());
            prop_assert_eq!(result.game_over, engine.is_game_over());

            let len = engine.offered_blocks().len();
            prop_assert!((1..=HAND_SIZE).contains(&len));
            if result.replenished {
                prop_assert_eq!(len, HAND_SIZE);
            } else {
                prop_assert_eq!(len, before.offered_blocks().len() - 1);
            }

            // The placed cells are occupied unless a clear emptied them
            for &(r, c) in &result.placed_cells {
                let cleared = result.cleared_cells.contains(&(r, c));
                prop_assert_eq!(engine.grid().is_filled(r as i32, c as i32), !cleared);
            }
        }
    }

    #[test]
    fn game_over_matches_exhaustive_search(
        rows in dense_rows(),
        shapes in proptest::collection::vec(custom_shape(), 1..=HAND_SIZE),
    ) {
        let queue = BlockQueue::from_blocks(
            shapes.into_iter().map(Block::new),
            StdRng::seed_from_u64(0),
        );
        let mut engine = GameEngine::from_parts(Grid::from_rows(rows), queue, 0);
        let moves = legal_moves(&engine);
        prop_assert_eq!(engine.is_game_over(), moves.is_empty());

        if let Some(&(index, row, col)) = moves.first() {
            prop_assert!(engine.attempt_placement(index, row, col).is_ok());
        } else {
            for index in 0..engine.offered_blocks().len() {
                prop_assert!(engine.attempt_placement(index, -1, -1).is_err());
                prop_assert!(engine.attempt_placement(index, 0, 0).is_err());
            }
        }
    }

    #[test]
    fn placing_a_shape_blocks_the_same_spot(seed in any::<u64>(), row in 0i32..8, col in 0i32..8) {
        let engine = GameEngine::new(seed);
        let shape = engine.offered_blocks()[0].shape().clone();
        let mut grid = Grid::new();

        if grid.place(&shape, row, col) {
            prop_assert!(!grid.can_place(&shape, row, col));
            prop_assert_eq!(grid.filled_count(), shape.cell_count());
        } else {
            prop_assert!(grid.is_empty());
        }
    }

    #[test]
    fn clearing_twice_changes_nothing(
        rows in proptest::array::uniform8(proptest::array::uniform8(any::<bool>())),
    ) {
        let mut grid = Grid::from_rows(rows);
        let lines = grid.find_completed_lines();

        grid.clear_lines(&lines);
        let once = grid.clone();
        let again = grid.clear_lines(&lines);

        prop_assert!(again.is_empty());
        prop_assert_eq!(&grid, &once);
        prop_assert!(grid.find_completed_lines().is_empty());
        for line in &lines {
            prop_assert!(grid.line(*line).iter().all(|c| *c == Cell::Empty));
        }
    }
}
