//! Save module - JSON persistence for a whole session
//!
//! Grid cells are stored row-major with row 0 at the bottom, each either `null` or
//! an `[r, g, b]` triple. Shapes are stored by catalog name. The undo history keeps
//! the slate that was on offer before each recorded placement, so undo after a
//! reload behaves exactly as it would have before saving.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use blockfit_core::{shape_by_name, Grid, GridSnapshot, SimpleRng, UndoManager};
use blockfit_types::{Cell, Difficulty, Rgb, SLATE_SIZE};

use crate::config::SessionConfig;
use crate::error::SaveError;
use crate::score::{HighScores, ScoreKeeper};
use crate::session::{GameSession, SessionState};
use crate::slate::{Slate, SlatePiece};

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPiece {
    pub shape: String,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSnapshot {
    pub cells: Vec<Option<[u8; 3]>>,
    pub score: u32,
    pub slate: Vec<Option<SavedPiece>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedHighScores {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub all_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSave {
    pub version: u32,
    pub state: String,
    pub difficulty: String,
    pub width: u8,
    pub height: u8,
    pub cells: Vec<Option<[u8; 3]>>,
    pub score: u32,
    pub max_undos: u32,
    pub remaining_undos: u32,
    /// Oldest first
    #[serde(default)]
    pub history: Vec<SavedSnapshot>,
    pub slate: Vec<Option<SavedPiece>>,
    pub rng_state: u32,
    #[serde(default)]
    pub high_scores: SavedHighScores,
}

impl SessionSave {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn encode_cells(cells: &[Cell]) -> Vec<Option<[u8; 3]>> {
    cells
        .iter()
        .map(|cell| cell.map(|c| [c.r, c.g, c.b]))
        .collect()
}

fn decode_cells(cells: &[Option<[u8; 3]>], expected: usize) -> Result<Vec<Cell>, SaveError> {
    if cells.len() != expected {
        return Err(SaveError::CellCount {
            expected,
            found: cells.len(),
        });
    }
    Ok(cells
        .iter()
        .map(|cell| cell.map(|[r, g, b]| Rgb::new(r, g, b)))
        .collect())
}

fn encode_slate(slate: &Slate) -> Vec<Option<SavedPiece>> {
    slate
        .slots()
        .iter()
        .map(|slot| {
            slot.map(|piece| SavedPiece {
                shape: piece.shape.name.to_string(),
                color: [piece.color.r, piece.color.g, piece.color.b],
            })
        })
        .collect()
}

fn decode_slate(slots: &[Option<SavedPiece>]) -> Result<Slate, SaveError> {
    if slots.len() != SLATE_SIZE {
        return Err(SaveError::SlateSize {
            expected: SLATE_SIZE,
            found: slots.len(),
        });
    }
    let mut out = [None; SLATE_SIZE];
    for (dst, src) in out.iter_mut().zip(slots) {
        if let Some(saved) = src {
            let shape = shape_by_name(&saved.shape)
                .ok_or_else(|| SaveError::UnknownShape(saved.shape.clone()))?;
            let [r, g, b] = saved.color;
            *dst = Some(SlatePiece {
                shape,
                color: Rgb::new(r, g, b),
            });
        }
    }
    Ok(Slate::from_slots(out))
}

impl GameSession {
    /// Capture everything needed to resume this session later
    pub fn to_save(&self) -> SessionSave {
        let history = self
            .undo
            .history()
            .zip(self.slate_history.iter())
            .map(|(snapshot, slate)| SavedSnapshot {
                cells: encode_cells(snapshot.cells()),
                score: snapshot.score(),
                slate: encode_slate(slate),
            })
            .collect();
        let high = self.scores.high_scores();

        SessionSave {
            version: SAVE_VERSION,
            state: self.state.as_str().to_string(),
            difficulty: self.difficulty.as_str().to_string(),
            width: self.grid.width(),
            height: self.grid.height(),
            cells: encode_cells(self.grid.cells()),
            score: self.scores.current(),
            max_undos: self.undo.max_undos(),
            remaining_undos: self.undo.remaining(),
            history,
            slate: encode_slate(&self.slate),
            rng_state: self.rng.state(),
            high_scores: SavedHighScores {
                easy: high.best(Difficulty::Easy),
                medium: high.best(Difficulty::Medium),
                hard: high.best(Difficulty::Hard),
                all_time: high.all_time(),
            },
        }
    }

    /// Rebuild a session from a save. Grid dimensions, undo budget and difficulty come
    /// from the save; the seed in `config` is unused because the RNG state is restored.
    pub fn from_save(config: SessionConfig, save: &SessionSave) -> Result<Self, SaveError> {
        if save.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion(save.version));
        }
        let (width, height) = (save.width, save.height);
        if width == 0 || height == 0 {
            return Err(SaveError::BadDimensions { width, height });
        }
        let difficulty = Difficulty::from_str(&save.difficulty)
            .ok_or_else(|| SaveError::UnknownDifficulty(save.difficulty.clone()))?;
        // Unknown states load as a fresh menu
        let state = SessionState::from_str(&save.state).unwrap_or(SessionState::Menu);
        let area = width as usize * height as usize;

        let mut grid = Grid::new(width, height);
        let current = GridSnapshot::from_parts(width, height, decode_cells(&save.cells, area)?, 0)
            .ok_or(SaveError::CellCount {
                expected: area,
                found: save.cells.len(),
            })?;
        grid.restore(&current);

        let mut snapshots = Vec::with_capacity(save.history.len());
        let mut slate_history = VecDeque::with_capacity(save.history.len());
        for saved in &save.history {
            let cells = decode_cells(&saved.cells, area)?;
            let snapshot = GridSnapshot::from_parts(width, height, cells, saved.score).ok_or(
                SaveError::CellCount {
                    expected: area,
                    found: saved.cells.len(),
                },
            )?;
            snapshots.push(snapshot);
            slate_history.push_back(decode_slate(&saved.slate)?);
        }
        let undo = UndoManager::from_parts(save.max_undos, save.remaining_undos, snapshots);
        while slate_history.len() > undo.depth() {
            slate_history.pop_front();
        }

        let h = save.high_scores;
        let high = HighScores::new([h.easy, h.medium, h.hard], h.all_time);
        let mut scores = ScoreKeeper::new(high);
        scores.set(save.score);

        Ok(Self {
            config: SessionConfig {
                width,
                height,
                max_undos: save.max_undos,
                difficulty,
                ..config
            },
            state,
            difficulty,
            grid,
            rng: SimpleRng::from_state(save.rng_state),
            undo,
            slate: decode_slate(&save.slate)?,
            slate_history,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfit_types::Anchor;

    fn played_session() -> GameSession {
        let mut session = GameSession::new(SessionConfig {
            seed: 9,
            ..SessionConfig::default()
        });
        session.start(Difficulty::Medium);
        session.place(0, Anchor::new(0, 0)).unwrap();
        session
    }

    #[test]
    fn save_then_load_restores_session() {
        let session = played_session();
        let save = session.to_save();
        let json = save.to_json().unwrap();

        let loaded = SessionSave::from_json(&json).unwrap();
        let restored = GameSession::from_save(SessionConfig::default(), &loaded).unwrap();
        assert_eq!(restored.grid(), session.grid());
        assert_eq!(restored.slate(), session.slate());
        assert_eq!(restored.score(), session.score());
        assert_eq!(restored.remaining_undos(), session.remaining_undos());
        assert_eq!(restored.state(), SessionState::Playing);
        assert_eq!(restored.difficulty(), Difficulty::Medium);
        assert_eq!(restored.to_save(), save);
    }

    #[test]
    fn cells_are_null_or_rgb_triples() {
        let session = played_session();
        let json = session.to_save().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let cells = value["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 64);
        assert!(cells[0].is_array());
        assert_eq!(cells[0].as_array().unwrap().len(), 3);
        assert!(cells.iter().any(|c| c.is_null()));
    }

    #[test]
    fn rejects_unknown_shape() {
        let mut save = played_session().to_save();
        save.slate[1] = Some(SavedPiece {
            shape: "Pentomino_X".to_string(),
            color: [0, 0, 0],
        });
        let err = GameSession::from_save(SessionConfig::default(), &save).unwrap_err();
        assert!(matches!(err, SaveError::UnknownShape(ref name) if name == "Pentomino_X"));
    }

    #[test]
    fn rejects_inconsistent_cells_and_versions() {
        let mut save = played_session().to_save();
        save.cells.pop();
        assert!(matches!(
            GameSession::from_save(SessionConfig::default(), &save),
            Err(SaveError::CellCount {
                expected: 64,
                found: 63
            })
        ));

        let mut save = played_session().to_save();
        save.version = 99;
        assert!(matches!(
            GameSession::from_save(SessionConfig::default(), &save),
            Err(SaveError::UnsupportedVersion(99))
        ));

        let mut save = played_session().to_save();
        save.width = 0;
        assert!(matches!(
            GameSession::from_save(SessionConfig::default(), &save),
            Err(SaveError::BadDimensions { .. })
        ));
    }
}
