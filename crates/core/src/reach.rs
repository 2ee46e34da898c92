//! Reachability module - can any offered piece still be placed?
//!
//! This is the only game-over test: a match ends when none of the pieces still on
//! offer fits anywhere on the grid. Anchors are tried column by column over every
//! in-bounds cell; worst case is O(width * height * cells).

use crate::grid::Grid;
use crate::pieces::Shape;
use crate::types::Anchor;

/// First anchor (scanning x, then y) where `shape` fits, if any
pub fn find_fit(grid: &Grid, shape: &Shape) -> Option<Anchor> {
    // A shape larger than the free area can never fit.
    if shape.is_empty() || shape.cell_count() > grid.cells().len() - grid.occupied_count() {
        return None;
    }
    (0..grid.width() as i32)
        .flat_map(|x| (0..grid.height() as i32).map(move |y| Anchor::new(x, y)))
        .find(|&anchor| grid.can_place(shape, anchor))
}

/// True if `shape` fits at some anchor inside the grid
pub fn can_place_anywhere(grid: &Grid, shape: &Shape) -> bool {
    find_fit(grid, shape).is_some()
}

/// True iff at least one of `shapes` fits somewhere.
///
/// An empty collection yields `false`: nothing fits because nothing is offered.
/// Callers must not treat that as a game-over decision.
pub fn any_fits<'a, I>(grid: &Grid, shapes: I) -> bool
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .any(|shape| can_place_anywhere(grid, shape))
}
