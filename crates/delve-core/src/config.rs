//! Generation tunables and their validation
//!
//! Every invariant the generator relies on is checked here, up front.
//! The splitting and carving loops themselves run unguarded, so a
//! configuration that passes [`GenConfig::validate`] must leave them no
//! way to stall.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default board width in cells
pub const BOARD_WIDTH: usize = 80;

/// Default board height in cells
pub const BOARD_HEIGHT: usize = 21;

/// Invalid generation configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The split-size rejection loop needs room for two minimum children.
    #[error(
        "max leaf {axis} {max_leaf} is less than twice the minimum {axis} {min}; splitting could never terminate"
    )]
    MaxLeafTooSmall {
        axis: &'static str,
        max_leaf: usize,
        min: usize,
    },

    /// A leaf must fit its room plus a one-cell closed margin on each side.
    #[error("minimum leaf {axis} {min_leaf} cannot fit a room {axis} of {min_room} plus margins")]
    LeafMarginTooTight {
        axis: &'static str,
        min_leaf: usize,
        min_room: usize,
    },

    /// The whole board may end up as a single leaf and must fit a room too.
    #[error("board {axis} {dim} cannot fit a room {axis} of {min_room} plus margins")]
    BoardTooSmall {
        axis: &'static str,
        dim: usize,
        min_room: usize,
    },

    /// A zero-area room would leave a leaf with no open cells, which would
    /// stall corridor anchor sampling.
    #[error("minimum room {axis} must be at least 1")]
    ZeroRoomDimension { axis: &'static str },
}

/// Tunables for dungeon generation
///
/// The defaults reproduce the classic 80x21 board. All bounds are in
/// cells; `min_*` and `max_leaf_*` constrain the partitioner, the
/// `override_*` thresholds force the cut axis for thin regions, and
/// `min_room_*` bound the rooms carved into the leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Smallest region width a split may produce
    pub min_width: usize,
    /// Smallest region height a split may produce
    pub min_height: usize,
    /// Regions narrower than this are not split again
    pub max_leaf_width: usize,
    /// Regions shorter than this are not split again
    pub max_leaf_height: usize,
    /// At or below this width, always cut the height
    pub override_width: usize,
    /// At or below this height, always cut the width
    pub override_height: usize,
    /// Smallest room width
    pub min_room_width: usize,
    /// Smallest room height
    pub min_room_height: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            min_width: 8,
            min_height: 6,
            max_leaf_width: 22,
            max_leaf_height: 18,
            // min + 6: thin enough that another cut on the same axis
            // would crowd the minimum
            override_width: 14,
            override_height: 12,
            min_room_width: 6,
            min_room_height: 4,
        }
    }
}

impl GenConfig {
    /// Check that generating a `width` x `height` board with these
    /// tunables is well-defined
    pub fn validate(&self, width: usize, height: usize) -> Result<(), ConfigError> {
        if self.min_room_width == 0 {
            return Err(ConfigError::ZeroRoomDimension { axis: "width" });
        }
        if self.min_room_height == 0 {
            return Err(ConfigError::ZeroRoomDimension { axis: "height" });
        }
        if self.max_leaf_width < 2 * self.min_width {
            return Err(ConfigError::MaxLeafTooSmall {
                axis: "width",
                max_leaf: self.max_leaf_width,
                min: self.min_width,
            });
        }
        if self.max_leaf_height < 2 * self.min_height {
            return Err(ConfigError::MaxLeafTooSmall {
                axis: "height",
                max_leaf: self.max_leaf_height,
                min: self.min_height,
            });
        }
        if self.min_width < self.min_room_width + 2 {
            return Err(ConfigError::LeafMarginTooTight {
                axis: "width",
                min_leaf: self.min_width,
                min_room: self.min_room_width,
            });
        }
        if self.min_height < self.min_room_height + 2 {
            return Err(ConfigError::LeafMarginTooTight {
                axis: "height",
                min_leaf: self.min_height,
                min_room: self.min_room_height,
            });
        }
        if width < self.min_room_width + 2 {
            return Err(ConfigError::BoardTooSmall {
                axis: "width",
                dim: width,
                min_room: self.min_room_width,
            });
        }
        if height < self.min_room_height + 2 {
            return Err(ConfigError::BoardTooSmall {
                axis: "height",
                dim: height,
                min_room: self.min_room_height,
            });
        }
        Ok(())
    }
}
