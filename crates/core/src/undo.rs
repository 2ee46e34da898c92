//! Undo module - bounded snapshot history and undo budget
//!
//! Two independent conditions gate an undo: the budget must be positive and the
//! history must be non-empty. Both are reset together at game start.
//!
//! The history holds at most `max_undos` entries; the oldest is dropped on overflow.

use std::collections::VecDeque;

use tracing::debug;

use crate::grid::Grid;
use crate::snapshot::GridSnapshot;

/// Receives the score stored in a snapshot when an undo restores it.
///
/// The core never owns the running score; whoever does implements this.
pub trait ScoreSink {
    fn restore_score(&mut self, score: u32);
}

impl ScoreSink for u32 {
    fn restore_score(&mut self, score: u32) {
        *self = score;
    }
}

/// Undo budget plus a stack of pre-placement snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoManager {
    max_undos: u32,
    remaining: u32,
    history: VecDeque<GridSnapshot>,
}

impl UndoManager {
    pub fn new(max_undos: u32) -> Self {
        let mut manager = Self::default();
        manager.reset_undos(max_undos);
        manager
    }

    /// Rebuild from persisted parts. `remaining` is clamped to `max_undos` and only the
    /// newest `max_undos` snapshots are kept.
    pub fn from_parts(max_undos: u32, remaining: u32, history: Vec<GridSnapshot>) -> Self {
        let mut manager = Self {
            max_undos,
            remaining: remaining.min(max_undos),
            history: history.into(),
        };
        manager.trim();
        manager
    }

    /// Set the budget to `max_undos` and forget all history. Called once per game start.
    pub fn reset_undos(&mut self, max_undos: u32) {
        self.max_undos = max_undos;
        self.remaining = max_undos;
        self.history.clear();
    }

    /// Push the state captured immediately before a placement mutates the grid
    pub fn record_pre_mutation_state(&mut self, snapshot: GridSnapshot) {
        self.history.push_back(snapshot);
        self.trim();
    }

    fn trim(&mut self) {
        while self.history.len() > self.max_undos as usize {
            self.history.pop_front();
        }
    }

    /// Undo the most recent recorded placement.
    ///
    /// Returns false without side effects when the budget is spent or there is no
    /// history. Otherwise restores the grid, hands the stored score to `scores` and
    /// spends one undo.
    pub fn try_undo<S: ScoreSink + ?Sized>(&mut self, grid: &mut Grid, scores: &mut S) -> bool {
        if self.remaining == 0 {
            return false;
        }
        let Some(snapshot) = self.history.pop_back() else {
            return false;
        };

        grid.restore(&snapshot);
        scores.restore_score(snapshot.score());
        self.remaining -= 1;
        debug!(
            remaining = self.remaining,
            depth = self.history.len(),
            "undo applied"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        self.remaining > 0 && !self.history.is_empty()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn max_undos(&self) -> u32 {
        self.max_undos
    }

    /// Number of snapshots currently held
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Snapshots oldest first
    pub fn history(&self) -> impl Iterator<Item = &GridSnapshot> {
        self.history.iter()
    }
}
