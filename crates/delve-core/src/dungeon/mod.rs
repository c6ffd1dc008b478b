//! Binary space partition dungeon generation
//!
//! Splits the board into a tree of regions, carves one room per leaf,
//! then joins sibling regions bottom-up with corridors until the level
//! is a single open network.

mod connect;
mod generation;
mod grid;
mod partition;
mod region;
mod room;

pub use generation::{generate_default, generate_dungeon};
pub use grid::Grid;
pub use region::{Rect, Region};
