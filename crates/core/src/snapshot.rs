use crate::types::Cell;

/// Full copy of grid state plus the score at capture time.
///
/// Created by [`Grid::take_snapshot`](crate::grid::Grid::take_snapshot) and consumed by
/// [`Grid::restore`](crate::grid::Grid::restore).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
    score: u32,
}

impl GridSnapshot {
    pub(crate) fn new(width: u8, height: u8, cells: Vec<Cell>, score: u32) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
            score,
        }
    }

    /// Rebuild a snapshot from persisted parts.
    ///
    /// Returns `None` when `cells` does not hold exactly `width * height` entries.
    pub fn from_parts(width: u8, height: u8, cells: Vec<Cell>, score: u32) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self::new(width, height, cells, score))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Row-major cells, `y * width + x`, row 0 at the bottom
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Occupancy of a cell; out-of-range coordinates read as empty
    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize].is_some()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
