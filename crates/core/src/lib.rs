//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the rules of the block-placement puzzle: pieces are dropped
//! onto a fixed grid at a chosen anchor, and any row or column that becomes full
//! is cleared. It has **zero dependencies** on rendering, input, or storage, making it:
//!
//! - **Deterministic**: Same seed deals identical pieces (for replays and tests)
//! - **Synchronous**: Every operation runs to completion; there are no timers or frames
//! - **Bounded**: Every operation is O(grid size) and allocation-light
//!
//! # Module Structure
//!
//! - [`pieces`]: Static polyomino catalog per difficulty tier and random selection
//! - [`grid`]: Occupancy matrix with atomic placement and row/column clearing
//! - [`reach`]: Exhaustive "can anything still fit" search that drives game over
//! - [`snapshot`]: Full copies of grid state plus score
//! - [`undo`]: Undo budget and bounded snapshot history
//! - [`rng`]: Seeded LCG used for dealing
//! - [`scoring`]: Points for a single placement
//!
//! # Orchestration Order
//!
//! Callers run one placement at a time: validate, snapshot, place, then check
//! reachability for the pieces still on offer.
//!
//! # Example
//!
//! ```
//! use blockfit_core::{any_fits, shape_by_name, Grid, UndoManager};
//! use blockfit_core::types::{Anchor, Rgb};
//!
//! let mut grid = Grid::default();
//! let mut undo = UndoManager::new(3);
//! let mut score = 0u32;
//!
//! let line = shape_by_name("Line3_H").unwrap();
//! let anchor = Anchor::new(0, 0);
//! assert!(grid.can_place(line, anchor));
//!
//! undo.record_pre_mutation_state(grid.take_snapshot(score));
//! let result = grid.place(line, anchor, Rgb::new(255, 128, 0));
//! assert!(result.success);
//! score += 3;
//!
//! assert!(any_fits(&grid, [line]));
//!
//! assert!(undo.try_undo(&mut grid, &mut score));
//! assert!(grid.is_blank());
//! assert_eq!(score, 0);
//! ```

pub mod grid;
pub mod pieces;
pub mod reach;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod undo;

pub use blockfit_types as types;

// Re-export commonly used types for convenience
pub use grid::{ClearedLines, Grid, Placement};
pub use pieces::{random_shape, shape_by_name, shapes_for, Shape};
pub use reach::{any_fits, can_place_anywhere, find_fit};
pub use rng::SimpleRng;
pub use scoring::{placement_score, score_placement, ScoreResult};
pub use snapshot::GridSnapshot;
pub use undo::{ScoreSink, UndoManager};
