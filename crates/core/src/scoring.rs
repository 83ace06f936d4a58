//! Scoring module - line clear rewards
//!
//! Every cleared line is worth a flat `POINTS_PER_LINE`. There is no block-size bonus,
//! no combo chain and no multiplier for simultaneous clears: two lines at once score
//! exactly twice one line.

use crate::types::POINTS_PER_LINE;

/// Points for clearing `lines` rows and columns in one placement
pub fn calculate_line_score(lines: usize) -> u32 {
    let lines = u32::try_from(lines).unwrap_or(u32::MAX);
    POINTS_PER_LINE.saturating_mul(lines)
}

/// Add `points` to `score`, saturating at `u32::MAX` so the score never wraps downward
pub fn add_points(score: u32, points: u32) -> u32 {
    score.saturating_add(points)
}
