//! delve-core: BSP dungeon generation and tile board logic
//!
//! This crate contains the whole generation pipeline and the board
//! layer built on top of it, with no I/O dependencies. Everything is
//! deterministic given a seed, so levels can be regenerated instead of
//! stored.

pub mod board;
pub mod dungeon;
pub mod tile;

mod config;
mod rng;

pub use config::{BOARD_HEIGHT, BOARD_WIDTH, ConfigError, GenConfig};
pub use rng::DungeonRng;
