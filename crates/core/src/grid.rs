//! Grid module - owns the occupancy matrix
//!
//! The grid is a W x H matrix where each cell is empty or painted with the colour of
//! the piece covering it. Storage is a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows bottom to top,
//! so (0, 0) is the bottom-left cell and the flat index is `y * width + x`.
//!
//! Placement is atomic: a shape is validated in full before any cell is written.
//! Line clearing detects every full row and column first and only then empties
//! them, so clearing a row can never complete or break a column in the same pass.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::pieces::Shape;
use crate::snapshot::GridSnapshot;
use crate::types::{Anchor, Cell, PlacementResult, Rgb, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_DIM};

/// Row and column indices emptied by one placement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    pub rows: ArrayVec<u8, { MAX_GRID_DIM as usize }>,
    pub columns: ArrayVec<u8, { MAX_GRID_DIM as usize }>,
}

impl ClearedLines {
    /// Rows plus columns; a cell at a row/column intersection counts for both
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.columns.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// Full outcome of a placement, for consumers that animate cleared lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub result: PlacementResult,
    pub cleared: ClearedLines,
}

/// The playfield - `width` columns x `height` rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

fn assert_dimensions(width: u8, height: u8) {
    assert!(
        width > 0 && height > 0,
        "grid dimensions {}x{} must be positive",
        width,
        height
    );
}

impl Grid {
    /// Create a new empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u8, height: u8) -> Self {
        assert_dimensions(width, height);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Reallocate for new dimensions and empty every cell
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn reset(&mut self, width: u8, height: u8) {
        assert_dimensions(width, height);
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, None);
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_column_full(&self, x: usize) -> bool {
        if x >= self.width as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(x)
            .step_by(self.width as usize)
            .all(|cell| cell.is_some())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Absolute cells a shape would cover at `anchor` (may lie outside the grid)
    pub fn target_cells<'a>(
        &self,
        shape: &'a Shape,
        anchor: Anchor,
    ) -> impl Iterator<Item = (i32, i32)> + 'a {
        shape.offsets.iter().map(move |&(dx, dy)| anchor.offset(dx, dy))
    }

    /// Check whether `shape` fits at `anchor`: every translated cell in bounds and empty.
    /// Zero-area shapes never fit. Pure query.
    pub fn can_place(&self, shape: &Shape, anchor: Anchor) -> bool {
        !shape.is_empty()
            && shape.offsets.iter().all(|&(dx, dy)| {
                let (x, y) = anchor.offset(dx, dy);
                self.is_empty_at(x, y)
            })
    }

    /// Place `shape` at `anchor`, then clear completed lines
    ///
    /// On rejection the grid is left untouched.
    pub fn place(&mut self, shape: &Shape, anchor: Anchor, color: Rgb) -> PlacementResult {
        self.place_detailed(shape, anchor, color).result
    }

    /// Like [`Grid::place`] but also reports which rows and columns were cleared
    pub fn place_detailed(&mut self, shape: &Shape, anchor: Anchor, color: Rgb) -> Placement {
        // Validate all cells before writing any of them
        if !self.can_place(shape, anchor) {
            trace!(shape = shape.name, x = anchor.x, y = anchor.y, "placement rejected");
            return Placement {
                result: PlacementResult::rejected(),
                cleared: ClearedLines::default(),
            };
        }

        for &(dx, dy) in shape.offsets {
            let (x, y) = anchor.offset(dx, dy);
            self.set(x, y, Some(color));
        }

        let cleared = self.clear_full_lines();
        let result = PlacementResult::placed(cleared.count());
        debug!(
            shape = shape.name,
            x = anchor.x,
            y = anchor.y,
            rows = cleared.rows.len(),
            columns = cleared.columns.len(),
            combo = result.is_combo,
            "piece placed"
        );
        Placement { result, cleared }
    }

    /// Detect every full row and column, then empty them all.
    /// Zero-allocation: indices are collected on the stack.
    fn clear_full_lines(&mut self) -> ClearedLines {
        let mut cleared = ClearedLines::default();

        // Detection sees only the post-placement, pre-clear state
        for y in 0..self.height {
            if self.is_row_full(y as usize) {
                cleared.rows.push(y);
            }
        }
        for x in 0..self.width {
            if self.is_column_full(x as usize) {
                cleared.columns.push(x);
            }
        }

        let width = self.width as usize;
        for &y in &cleared.rows {
            let start = y as usize * width;
            for cell in &mut self.cells[start..start + width] {
                *cell = None;
            }
        }
        for &x in &cleared.columns {
            for cell in self.cells.iter_mut().skip(x as usize).step_by(width) {
                *cell = None;
            }
        }

        cleared
    }

    /// Copy the current cells together with the caller's score. No mutation.
    pub fn take_snapshot(&self, score: u32) -> GridSnapshot {
        GridSnapshot::new(self.width, self.height, self.cells.clone(), score)
    }

    /// Replace every cell with the snapshot's contents
    ///
    /// # Panics
    ///
    /// Panics if the snapshot was taken from a grid with different dimensions.
    pub fn restore(&mut self, snapshot: &GridSnapshot) {
        assert!(
            snapshot.width() == self.width && snapshot.height() == self.height,
            "snapshot is {}x{} but grid is {}x{}",
            snapshot.width(),
            snapshot.height(),
            self.width,
            self.height
        );
        self.cells.copy_from_slice(snapshot.cells());
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Text rendering, top row first: `#` occupied, `.` empty
    pub fn to_ascii(&self) -> String {
        let width = self.width as usize;
        let mut out = String::with_capacity((width + 1) * self.height as usize);
        for y in (0..self.height as usize).rev() {
            for cell in &self.cells[y * width..(y + 1) * width] {
                out.push(if cell.is_some() { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// Build a grid from text rows, top row first (`#` occupied, anything else empty).
    /// Occupied cells are painted with `color`.
    ///
    /// # Panics
    ///
    /// Panics if rows have different lengths or the dimensions are out of range.
    pub fn from_ascii(rows: &[&str], color: Rgb) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        assert!(
            rows.iter().all(|row| row.chars().count() == width),
            "ragged grid rows"
        );
        let width = u8::try_from(width).expect("grid rows wider than 255 cells");
        let height = u8::try_from(height).expect("more than 255 grid rows");
        let mut grid = Self::new(width, height);
        for (i, row) in rows.iter().enumerate() {
            let y = (height as usize - 1 - i) as i32;
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set(x as i32, y, Some(color));
                }
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
