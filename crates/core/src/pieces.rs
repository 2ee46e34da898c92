//! Pieces module - polyomino shape catalog
//!
//! All shapes live in one static table ordered by tier: the Easy shapes first,
//! then the Medium-only shapes, then the Hard-only shapes. A tier's pool is the
//! prefix of that table up to its last shape, so Medium always contains Easy and
//! Hard always contains Medium.

use crate::rng::SimpleRng;
use crate::types::{CellOffset, Difficulty, Rgb};

/// Immutable polyomino definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    /// Block offsets relative to the anchor; may be negative and need not contain (0, 0)
    pub offsets: &'static [CellOffset],
    pub color: Rgb,
    pub min_difficulty: Difficulty,
}

impl Shape {
    pub const fn new(
        name: &'static str,
        offsets: &'static [CellOffset],
        color: Rgb,
        min_difficulty: Difficulty,
    ) -> Self {
        Self {
            name,
            offsets,
            color,
            min_difficulty,
        }
    }

    /// Number of blocks in the shape
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Zero-area shapes can never be placed
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Bounding box as `(min_dx, max_dx, min_dy, max_dy)`, `None` for a zero-area shape
    pub fn bounds(&self) -> Option<(i8, i8, i8, i8)> {
        let (&(x0, y0), rest) = self.offsets.split_first()?;
        Some(rest.iter().fold(
            (x0, x0, y0, y0),
            |(min_x, max_x, min_y, max_y), &(dx, dy)| {
                (min_x.min(dx), max_x.max(dx), min_y.min(dy), max_y.max(dy))
            },
        ))
    }

    /// Centre of the bounding box, used by presentation to centre the piece visually.
    /// A zero-area shape is centred on its anchor.
    pub fn center(&self) -> (f32, f32) {
        match self.bounds() {
            Some((min_x, max_x, min_y, max_y)) => (
                (min_x as f32 + max_x as f32) / 2.0,
                (min_y as f32 + max_y as f32) / 2.0,
            ),
            None => (0.0, 0.0),
        }
    }

    /// Width and height of the bounding box in cells
    pub fn extent(&self) -> (u16, u16) {
        match self.bounds() {
            Some((min_x, max_x, min_y, max_y)) => (
                (i16::from(max_x) - i16::from(min_x)) as u16 + 1,
                (i16::from(max_y) - i16::from(min_y)) as u16 + 1,
            ),
            None => (0, 0),
        }
    }

    /// Check the shape invariants: at least one offset and no duplicate cells
    pub fn is_well_formed(&self) -> bool {
        !self.offsets.is_empty()
            && self
                .offsets
                .iter()
                .enumerate()
                .all(|(i, off)| !self.offsets[i + 1..].contains(off))
    }
}

pub const RED: Rgb = Rgb::new(230, 64, 64);
pub const GREEN: Rgb = Rgb::new(77, 204, 77);
pub const BLUE: Rgb = Rgb::new(77, 128, 230);
pub const YELLOW: Rgb = Rgb::new(242, 204, 51);
pub const PURPLE: Rgb = Rgb::new(153, 77, 204);
pub const CYAN: Rgb = Rgb::new(77, 217, 217);
pub const ORANGE: Rgb = Rgb::new(242, 128, 51);
pub const PINK: Rgb = Rgb::new(230, 102, 179);

/// Colours handed out to dealt pieces (independent of the shape's own colour)
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(242, 77, 77),
    Rgb::new(77, 217, 77),
    Rgb::new(77, 128, 242),
    Rgb::new(242, 217, 51),
    Rgb::new(242, 128, 51),
    Rgb::new(179, 77, 230),
    Rgb::new(77, 230, 230),
    Rgb::new(242, 102, 179),
];

use crate::types::Difficulty::{Easy, Hard, Medium};

/// Every shape, ordered Easy → Medium-only → Hard-only
static CATALOG: [Shape; 16] = [
    // Easy
    Shape::new("Single", &[(0, 0)], YELLOW, Easy),
    Shape::new("Domino_H", &[(0, 0), (1, 0)], GREEN, Easy),
    Shape::new("Domino_V", &[(0, 0), (0, 1)], PINK, Easy),
    Shape::new("Line3_H", &[(0, 0), (1, 0), (2, 0)], ORANGE, Easy),
    Shape::new("Line3_V", &[(0, 0), (0, 1), (0, 2)], CYAN, Easy),
    Shape::new("Square2x2", &[(0, 0), (1, 0), (0, 1), (1, 1)], YELLOW, Easy),
    Shape::new("SmallL", &[(0, 0), (1, 0), (0, 1)], PINK, Easy),
    // Medium
    Shape::new("Line4_H", &[(0, 0), (1, 0), (2, 0), (3, 0)], CYAN, Medium),
    Shape::new("Line4_V", &[(0, 0), (0, 1), (0, 2), (0, 3)], BLUE, Medium),
    Shape::new("L_Right", &[(0, 0), (0, 1), (0, 2), (1, 0)], ORANGE, Medium),
    Shape::new("L_Left", &[(1, 0), (1, 1), (1, 2), (0, 0)], PURPLE, Medium),
    Shape::new("T_Up", &[(0, 0), (1, 0), (2, 0), (1, 1)], PURPLE, Medium),
    // Hard
    Shape::new("Line5_H", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], BLUE, Hard),
    Shape::new("Line5_V", &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], PURPLE, Hard),
    Shape::new(
        "Square3x3",
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (1, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ],
        RED,
        Hard,
    ),
    Shape::new("BigL", &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)], BLUE, Hard),
];

/// Pool sizes per tier (prefix lengths into `CATALOG`)
const EASY_POOL: usize = 7;
const MEDIUM_POOL: usize = 12;
const HARD_POOL: usize = 16;

/// Every shape across all tiers
pub fn catalog() -> &'static [Shape] {
    &CATALOG
}

/// Fixed pool for a difficulty tier. Pure and deterministic.
pub fn shapes_for(tier: Difficulty) -> &'static [Shape] {
    let len = match tier {
        Difficulty::Easy => EASY_POOL,
        Difficulty::Medium => MEDIUM_POOL,
        Difficulty::Hard => HARD_POOL,
    };
    &CATALOG[..len]
}

/// Draw a shape uniformly at random from the tier's pool
///
/// # Panics
///
/// Panics if the tier's pool is empty; that is a catalog configuration bug.
pub fn random_shape(tier: Difficulty, rng: &mut SimpleRng) -> &'static Shape {
    pick(shapes_for(tier), rng)
}

/// Draw a shape uniformly at random from an arbitrary pool
///
/// # Panics
///
/// Panics if `pool` is empty.
pub fn pick<'a>(pool: &'a [Shape], rng: &mut SimpleRng) -> &'a Shape {
    assert!(!pool.is_empty(), "piece pool is empty");
    &pool[rng.next_index(pool.len())]
}

/// Draw a colour from the dealing palette
pub fn random_color(rng: &mut SimpleRng) -> Rgb {
    PALETTE[rng.next_index(PALETTE.len())]
}

/// Look a shape up by name across every tier
pub fn shape_by_name(name: &str) -> Option<&'static Shape> {
    CATALOG.iter().find(|shape| shape.name == name)
}
