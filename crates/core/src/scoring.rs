//! Scoring module - points awarded for one placement
//!
//! The core never keeps a running total; it only prices a single placement:
//! one point per block placed, `LINE_BONUS` per cleared line, and on a combo an
//! extra `COMBO_BONUS` per cleared line.

use crate::types::{PlacementResult, COMBO_BONUS, LINE_BONUS};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// One point per block placed
    pub base: u32,
    pub line_bonus: u32,
    /// Non-zero only when more than one line cleared at once
    pub combo_bonus: u32,
    pub total: u32,
}

/// Price a placement of `cells` blocks that cleared `lines` lines
pub fn placement_score(cells: usize, lines: u32, combo: bool) -> ScoreResult {
    let base = cells as u32;
    let line_bonus = lines.saturating_mul(LINE_BONUS);
    let combo_bonus = if combo {
        lines.saturating_mul(COMBO_BONUS)
    } else {
        0
    };
    ScoreResult {
        base,
        line_bonus,
        combo_bonus,
        total: base.saturating_add(line_bonus).saturating_add(combo_bonus),
    }
}

/// Price a placement result; rejected placements are worth nothing
pub fn score_placement(cells: usize, result: &PlacementResult) -> ScoreResult {
    if !result.success {
        return ScoreResult::default();
    }
    placement_score(cells, result.lines_cleared, result.is_combo)
}
