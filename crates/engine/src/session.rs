//! Session module - one game of the block puzzle
//!
//! The session owns exactly one grid, undo manager, slate, RNG and score keeper and
//! drives them in a fixed order for every placement: validate, snapshot, place,
//! score, refill the slate, then check whether anything on offer still fits.
//! A match ends the moment nothing fits; from then on placements and undos are refused.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use blockfit_core::{
    any_fits, score_placement, ClearedLines, Grid, ScoreResult, SimpleRng, UndoManager,
};
use blockfit_types::{Anchor, Difficulty, PlacementResult, MAX_SHAPE_CELLS, SLATE_SIZE};

use crate::config::SessionConfig;
use crate::error::PlaceError;
use crate::score::{HighScores, ScoreKeeper};
use crate::slate::Slate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Menu => "menu",
            SessionState::Playing => "playing",
            SessionState::Paused => "paused",
            SessionState::GameOver => "game_over",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "menu" => Some(SessionState::Menu),
            "playing" => Some(SessionState::Playing),
            "paused" => Some(SessionState::Paused),
            "game_over" => Some(SessionState::GameOver),
            _ => None,
        }
    }
}

/// Live drag preview: whether the piece fits and which in-bounds cells it would cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub slot: usize,
    pub anchor: Anchor,
    pub valid: bool,
    pub cells: ArrayVec<(i32, i32), MAX_SHAPE_CELLS>,
}

/// Everything a presentation layer needs after an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub result: PlacementResult,
    pub cleared: ClearedLines,
    pub points: ScoreResult,
    /// A fresh slate was dealt because this placement used the last piece
    pub new_slate: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: SessionConfig,
    pub(crate) state: SessionState,
    pub(crate) difficulty: Difficulty,
    pub(crate) grid: Grid,
    pub(crate) rng: SimpleRng,
    pub(crate) undo: UndoManager,
    pub(crate) slate: Slate,
    /// Slate before each recorded placement, parallel to the undo history
    pub(crate) slate_history: VecDeque<Slate>,
    pub(crate) scores: ScoreKeeper,
}

impl GameSession {
    /// Create a session sitting in the menu
    ///
    /// # Panics
    ///
    /// Panics if the configured grid dimensions are zero or above the supported maximum.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Menu,
            difficulty: config.difficulty,
            grid: Grid::new(config.width, config.height),
            rng: SimpleRng::new(config.seed),
            undo: UndoManager::new(config.max_undos),
            slate: Slate::empty(),
            slate_history: VecDeque::new(),
            scores: ScoreKeeper::default(),
        }
    }

    /// Carry high scores over from an earlier session. The running score is kept.
    pub fn with_high_scores(mut self, high: HighScores) -> Self {
        self.scores.set_high_scores(high);
        self
    }

    /// Begin a new game at `difficulty`
    pub fn start(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.scores.reset();
        self.undo.reset_undos(self.config.max_undos);
        self.slate_history.clear();
        self.grid.reset(self.config.width, self.config.height);
        self.slate = Slate::deal(difficulty, &mut self.rng);
        self.state = SessionState::Playing;
        info!(
            difficulty = difficulty.as_str(),
            width = self.config.width,
            height = self.config.height,
            "game started"
        );
    }

    /// Start over at the current difficulty
    pub fn restart(&mut self) {
        self.start(self.difficulty);
    }

    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        self.state = SessionState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Playing;
        true
    }

    /// Abandon the current game and empty the board
    pub fn return_to_menu(&mut self) {
        self.state = SessionState::Menu;
        self.grid.clear();
        self.slate.clear();
        self.slate_history.clear();
        self.undo.reset_undos(self.config.max_undos);
    }

    /// Pure query for drag previews. `None` when there is nothing in `slot`.
    pub fn preview(&self, slot: usize, anchor: Anchor) -> Option<Preview> {
        let piece = self.slate.get(slot)?;
        let valid =
            self.state == SessionState::Playing && self.grid.can_place(piece.shape, anchor);
        let cells = self
            .grid
            .target_cells(piece.shape, anchor)
            .filter(|&(x, y)| !self.grid.is_out_of_bounds(x, y))
            .take(MAX_SHAPE_CELLS)
            .collect();
        Some(Preview {
            slot,
            anchor,
            valid,
            cells,
        })
    }

    /// Place the piece in `slot` with its (0, 0) offset at `anchor`
    pub fn place(&mut self, slot: usize, anchor: Anchor) -> Result<PlacementOutcome, PlaceError> {
        if self.state != SessionState::Playing {
            return Err(PlaceError::NotPlayable);
        }
        if slot >= SLATE_SIZE {
            return Err(PlaceError::InvalidSlot);
        }
        let piece = *self.slate.get(slot).ok_or(PlaceError::EmptySlot)?;
        if !self.grid.can_place(piece.shape, anchor) {
            trace!(slot, x = anchor.x, y = anchor.y, "placement refused");
            return Err(PlaceError::Blocked);
        }

        self.undo
            .record_pre_mutation_state(self.grid.take_snapshot(self.scores.current()));
        self.slate_history.push_back(self.slate);
        while self.slate_history.len() > self.undo.depth() {
            self.slate_history.pop_front();
        }

        let placement = self.grid.place_detailed(piece.shape, anchor, piece.color);
        debug_assert!(placement.result.success);

        let points = score_placement(piece.shape.cell_count(), &placement.result);
        self.scores.add(points.total);

        self.slate.take(slot);
        let new_slate = self.slate.is_exhausted();
        if new_slate {
            self.slate = Slate::deal(self.difficulty, &mut self.rng);
        }

        let game_over = self.check_game_over();
        Ok(PlacementOutcome {
            result: placement.result,
            cleared: placement.cleared,
            points,
            new_slate,
            game_over,
        })
    }

    fn check_game_over(&mut self) -> bool {
        // Nothing on offer means nothing to judge.
        if self.slate.is_exhausted() {
            return false;
        }
        if any_fits(&self.grid, self.slate.remaining_shapes()) {
            return false;
        }

        self.state = SessionState::GameOver;
        let new_high = self.scores.record_final(self.difficulty);
        info!(
            score = self.scores.current(),
            new_high,
            difficulty = self.difficulty.as_str(),
            "game over"
        );
        true
    }

    /// Revert the most recent placement: grid, score and slate.
    /// Returns false when not playing, out of undos, or there is no history.
    pub fn undo(&mut self) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        if !self.undo.try_undo(&mut self.grid, &mut self.scores) {
            return false;
        }
        if let Some(slate) = self.slate_history.pop_back() {
            self.slate = slate;
        }
        debug!(score = self.scores.current(), "slate restored after undo");
        true
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slate(&self) -> &Slate {
        &self.slate
    }

    pub fn score(&self) -> u32 {
        self.scores.current()
    }

    pub fn high_scores(&self) -> &HighScores {
        self.scores.high_scores()
    }

    pub fn remaining_undos(&self) -> u32 {
        self.undo.remaining()
    }

    pub fn can_undo(&self) -> bool {
        self.state == SessionState::Playing && self.undo.can_undo()
    }

    /// Test hook: overwrite the grid (dimensions must match the configuration)
    #[doc(hidden)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Test hook: replace the slate on offer
    #[doc(hidden)]
    pub fn set_slate(&mut self, slate: Slate) {
        self.slate = slate;
    }
}
