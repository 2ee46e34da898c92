//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, session orchestration, persistence).
//!
//! # Grid Dimensions
//!
//! The default playfield is a square 8x8 grid:
//!
//! - **Width**: 8 columns (indexed 0-7, left to right)
//! - **Height**: 8 rows (indexed 0-7, bottom to top)
//! - **Origin**: (0, 0) is the bottom-left cell
//!
//! Any positive `u8` dimension is accepted by the grid engine.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MAX_UNDOS` | 3 | Undo budget granted at game start |
//! | `SLATE_SIZE` | 3 | Pieces offered at once |
//! | `DEAL_ATTEMPTS` | 20 | Redraws tried per slot to avoid duplicate shapes |
//! | `LINE_BONUS` | 10 | Points per cleared line |
//! | `COMBO_BONUS` | 5 | Extra points per line on a combo |
//!
//! # Examples
//!
//! ```
//! use blockfit_types::{Anchor, Difficulty, PlacementResult, GRID_WIDTH, GRID_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let tier = Difficulty::from_str("Medium").unwrap();
//! assert_eq!(tier, Difficulty::Medium);
//! assert!(tier > Difficulty::Easy);
//!
//! // Anchors are plain grid coordinates
//! let anchor = Anchor::new(5, 0);
//! assert_eq!(anchor.offset(2, 1), (7, 1));
//!
//! // A rejected placement never reports cleared lines
//! let rejected = PlacementResult::rejected();
//! assert!(!rejected.success);
//! assert_eq!(rejected.lines_cleared, 0);
//!
//! assert_eq!(GRID_WIDTH, 8);
//! assert_eq!(GRID_HEIGHT, 8);
//! ```

/// Default grid width in cells (8 columns)
pub const GRID_WIDTH: u8 = 8;

/// Default grid height in cells (8 rows)
pub const GRID_HEIGHT: u8 = 8;

/// Largest width or height the grid engine accepts
pub const MAX_GRID_DIM: u8 = u8::MAX;

/// Largest number of cells in a catalog shape (the 3x3 square)
pub const MAX_SHAPE_CELLS: usize = 9;

/// Undo budget granted at the start of every game
pub const DEFAULT_MAX_UNDOS: u32 = 3;

/// Number of pieces offered to the player at once
pub const SLATE_SIZE: usize = 3;

/// Redraw attempts per slot when dealing a slate without duplicate shapes
pub const DEAL_ATTEMPTS: u32 = 20;

/// Points awarded per cleared line
pub const LINE_BONUS: u32 = 10;

/// Extra points per cleared line when a placement clears more than one line
pub const COMBO_BONUS: u32 = 5;


/// Difficulty tiers
///
/// Each tier's piece pool is a superset of the tier below it:
/// - **Easy**: small pieces only (1-4 cells)
/// - **Medium**: adds 4-cell lines, L shapes and the T
/// - **Hard**: adds 5-cell lines, the big L and the 3x3 square
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfit_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("extreme"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// 24-bit display colour carried by shapes and placed cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Occupied cell, painted with the colour of the piece that covers it
///
/// Occupancy and colour are stored together, so a cell can never be coloured but empty.
pub type Cell = Option<Rgb>;

/// Offset of a single block relative to the shape's anchor (dx, dy)
pub type CellOffset = (i8, i8);

/// Target grid cell for a shape's (0, 0) offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate a shape offset into absolute grid coordinates
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> (i32, i32) {
        (self.x + dx as i32, self.y + dy as i32)
    }
}

/// Outcome of one placement request
///
/// Returned synchronously to the caller; never stored by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementResult {
    pub success: bool,
    /// Full rows plus full columns cleared by this placement
    pub lines_cleared: u32,
    /// True iff more than one line was cleared at once
    pub is_combo: bool,
}

impl PlacementResult {
    /// Result for a placement that did not touch the grid
    pub const fn rejected() -> Self {
        Self {
            success: false,
            lines_cleared: 0,
            is_combo: false,
        }
    }

    /// Result for an applied placement that cleared `lines_cleared` lines
    pub const fn placed(lines_cleared: u32) -> Self {
        Self {
            success: true,
            lines_cleared,
            is_combo: lines_cleared > 1,
        }
    }
}
