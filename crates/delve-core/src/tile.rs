//! Board tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile terrain kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TileKind {
    /// Impassable rock
    #[default]
    Wall,
    /// Passable floor
    Open,
    /// Passable, only appears in externally authored maps
    Special,
}

impl TileKind {
    /// Check if entities can occupy this tile
    pub const fn is_passable(&self) -> bool {
        matches!(self, TileKind::Open | TileKind::Special)
    }

    /// Get the display character for this kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Open => '.',
            TileKind::Special => '*',
        }
    }
}

/// A single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Terrain kind
    pub kind: TileKind,
    /// Whether this tile has been brought into view
    pub visible: bool,
}

impl Tile {
    /// Create a wall tile; walls start out of sight
    pub const fn wall() -> Self {
        Self {
            kind: TileKind::Wall,
            visible: false,
        }
    }

    /// Create an open floor tile; floors start visible
    pub const fn floor() -> Self {
        Self {
            kind: TileKind::Open,
            visible: true,
        }
    }

    /// Create a special tile
    pub const fn special() -> Self {
        Self {
            kind: TileKind::Special,
            visible: true,
        }
    }

    pub const fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    /// Character for the saved map image
    ///
    /// The letter selects the kind; for walls and floors the case
    /// encodes visibility.
    pub const fn token(&self) -> char {
        match (self.kind, self.visible) {
            (TileKind::Wall, true) => 'W',
            (TileKind::Wall, false) => 'w',
            (TileKind::Open, true) => 'O',
            (TileKind::Open, false) => 'o',
            (TileKind::Special, _) => 'S',
        }
    }

    /// Parse a map image token
    ///
    /// Case only selects the kind: visibility is re-derived after
    /// import, so each kind comes back in its base state.
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'W' | 'w' => Some(Self::wall()),
            'O' | 'o' => Some(Self::floor()),
            'S' => Some(Self::special()),
            _ => None,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}
