//! Dungeon generation facade
//!
//! Ties the phases together: validate the configuration, partition the
//! board, place rooms, assimilate, and hand back the finished grid.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, ConfigError, GenConfig};
use crate::rng::DungeonRng;

use super::connect::fill;
use super::grid::Grid;
use super::partition::split;
use super::region::Region;

/// Generate a dungeon as an open/closed cell grid
///
/// The grid starts fully closed; partitioning divides the board into
/// regions, each leaf region gets one room, and assimilation corridors
/// join everything into a single connected open area. Equal dimensions
/// and configuration with equal-seed RNGs produce equal grids.
pub fn generate_dungeon(
    width: usize,
    height: usize,
    config: &GenConfig,
    rng: &mut DungeonRng,
) -> Result<Grid, ConfigError> {
    config.validate(width, height)?;
    Ok(generate_unchecked(width, height, config, rng))
}

/// Generate a default-size dungeon with the default tunables
///
/// The defaults always validate against the default board, so this
/// cannot fail.
pub fn generate_default(rng: &mut DungeonRng) -> Grid {
    generate_unchecked(BOARD_WIDTH, BOARD_HEIGHT, &GenConfig::default(), rng)
}

fn generate_unchecked(
    width: usize,
    height: usize,
    config: &GenConfig,
    rng: &mut DungeonRng,
) -> Grid {
    let mut grid = Grid::closed(width, height);
    let mut root = Region::root(width, height);
    split(&mut root, config, rng);
    fill(&mut root, &mut grid, config, rng);
    grid
}
