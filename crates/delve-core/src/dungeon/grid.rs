//! The open/closed cell grid produced by generation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boolean cell grid: `true` is open floor, `false` is solid wall
///
/// Cells are indexed `[x][y]` with `(0, 0)` in the top-left corner.
/// Generation starts from an all-closed grid and only ever opens cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// Create an all-closed grid
    pub fn closed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![false; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Whether the cell at (x, y) is open floor
    ///
    /// Out-of-bounds coordinates read as closed.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[x][y]
    }

    /// Open the cell at (x, y)
    pub(crate) fn carve(&mut self, x: usize, y: usize) {
        self.cells[x][y] = true;
    }

    /// Number of open cells
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|col| col.iter())
            .filter(|open| **open)
            .count()
    }

    /// Coordinates of all open cells, column by column
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).filter_map(move |y| self.cells[x][y].then_some((x, y)))
        })
    }
}

// One text line per row: `.` open, `#` closed. The quick way to eyeball
// a generated level.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| if self.cells[x][y] { '.' } else { '#' })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
