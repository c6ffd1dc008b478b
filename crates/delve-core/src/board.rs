//! The playable tile board built on top of a generated grid
//!
//! A [`Board`] turns the raw open/closed pattern into typed tiles,
//! tracks which of them are in view, answers movement queries, and
//! round-trips through a line-oriented text image for saving.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::Grid;
use crate::rng::DungeonRng;
use crate::tile::{Tile, TileKind};

/// Errors from parsing a saved map image
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapImageError {
    #[error("map image is empty")]
    Empty,
    #[error("row {row} is {got} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown tile token {token:?} at ({x}, {y})")]
    UnknownToken { token: char, x: usize, y: usize },
}

/// Outcome of an entity acting on a target tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The target is passable; the entity moves there
    Enter,
    /// The target is solid
    Bump,
    /// The target is off the board
    OutOfBounds,
}

/// Tile board with view state, indexed `[x][y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Board {
    /// Build a board from a generated grid
    ///
    /// Open cells become floors, closed cells become walls, and
    /// visibility is primed so the walls lining rooms and corridors
    /// start in view.
    pub fn from_grid(grid: &Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut tiles = vec![vec![Tile::wall(); height]; width];
        for x in 0..width {
            for y in 0..height {
                if grid.is_open(x, y) {
                    tiles[x][y] = Tile::floor();
                }
            }
        }
        let mut board = Self {
            width,
            height,
            tiles,
        };
        board.prime_visibility();
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (x, y), or None when off the board
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.get(x).and_then(|col| col.get(y))
    }

    /// Bring every tile that touches visible open space into view
    ///
    /// A tile turns visible when any cell of the 3x3 block around it
    /// holds a visible open floor. Floors start visible, so one pass
    /// lights exactly the walls lining rooms and corridors while fully
    /// enclosed rock stays dark.
    pub fn prime_visibility(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                if !self.tiles[x][y].visible && self.touches_visible_floor(x, y) {
                    self.tiles[x][y].visible = true;
                }
            }
        }
    }

    fn touches_visible_floor(&self, x: usize, y: usize) -> bool {
        let x_lo = x.saturating_sub(1);
        let y_lo = y.saturating_sub(1);
        let x_hi = (x + 1).min(self.width - 1);
        let y_hi = (y + 1).min(self.height - 1);
        for tx in x_lo..=x_hi {
            for ty in y_lo..=y_hi {
                let tile = &self.tiles[tx][ty];
                if tile.kind == TileKind::Open && tile.visible {
                    return true;
                }
            }
        }
        false
    }

    /// Number of passable tiles
    pub fn open_count(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|col| col.iter())
            .filter(|tile| tile.is_passable())
            .count()
    }

    /// Uniformly random passable coordinate
    ///
    /// Rejection-samples the whole board, so every passable tile is
    /// equally likely. Returns None when nothing is passable, since the
    /// sampling loop could never terminate.
    pub fn random_open(&self, rng: &mut DungeonRng) -> Option<(usize, usize)> {
        if self.open_count() == 0 {
            return None;
        }
        loop {
            let x = rng.uniform(0, self.width);
            let y = rng.uniform(0, self.height);
            if self.tiles[x][y].is_passable() {
                return Some((x, y));
            }
        }
    }

    /// Route an entity action aimed at (x, y)
    pub fn interact(&self, x: usize, y: usize) -> Interaction {
        match self.tile(x, y) {
            None => Interaction::OutOfBounds,
            Some(tile) if tile.is_passable() => Interaction::Enter,
            Some(_) => Interaction::Bump,
        }
    }

    /// Export the passability pattern as a plain grid
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::closed(self.width, self.height);
        for x in 0..self.width {
            for y in 0..self.height {
                if self.tiles[x][y].is_passable() {
                    grid.carve(x, y);
                }
            }
        }
        grid
    }

    /// Serialize as a saved map image, one text line per board row
    pub fn to_map_image(&self) -> String {
        let mut image = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                image.push(self.tiles[x][y].token());
            }
            image.push('\n');
        }
        image
    }

    /// Parse a saved map image
    ///
    /// Tokens select tile kinds only; visibility is rebuilt by priming
    /// from scratch, so the case carried in the image does not bind the
    /// result. All rows must match the width of the first.
    pub fn from_map_image(image: &str) -> Result<Self, MapImageError> {
        let lines: Vec<&str> = image.lines().collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(MapImageError::Empty);
        }
        let height = lines.len();
        let mut tiles = vec![vec![Tile::wall(); height]; width];
        for (y, line) in lines.iter().enumerate() {
            let mut got = 0;
            for (x, token) in line.chars().enumerate() {
                if x < width {
                    tiles[x][y] = Tile::from_token(token)
                        .ok_or(MapImageError::UnknownToken { token, x, y })?;
                }
                got += 1;
            }
            if got != width {
                return Err(MapImageError::RaggedRow {
                    row: y,
                    expected: width,
                    got,
                });
            }
        }
        let mut board = Self {
            width,
            height,
            tiles,
        };
        board.prime_visibility();
        Ok(board)
    }
}

// Kind symbols for tiles in view, blank space for everything else.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| {
                    let tile = &self.tiles[x][y];
                    if tile.visible { tile.kind.symbol() } else { ' ' }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
