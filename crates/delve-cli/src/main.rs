//! Command line front end for the delve dungeon generator
//!
//! Generates a level and prints it as text, or round-trips a level
//! through the saved map image format.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use delve_core::board::{Board, MapImageError};
use delve_core::dungeon::generate_dungeon;
use delve_core::{BOARD_HEIGHT, BOARD_WIDTH, ConfigError, DungeonRng, GenConfig};

#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Generate BSP dungeon levels and print them as text")]
struct Args {
    /// Board width in tiles
    #[arg(short = 'W', long, default_value_t = BOARD_WIDTH)]
    width: usize,

    /// Board height in tiles
    #[arg(short = 'H', long, default_value_t = BOARD_HEIGHT)]
    height: usize,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show the whole level instead of only the tiles in view
    #[arg(short, long)]
    reveal: bool,

    /// Write the level to a map image file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Load a map image file instead of generating
    #[arg(long)]
    load: Option<PathBuf>,

    /// Print tile counts after the map
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid generation config: {0}")]
    Config(#[from] ConfigError),

    #[error("Bad map image: {0}")]
    MapImage(#[from] MapImageError),
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("delve: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let board = if let Some(path) = &args.load {
        let image = fs::read_to_string(path)?;
        let board = Board::from_map_image(&image)?;
        println!(
            "Loaded {}x{} level from {}",
            board.width(),
            board.height(),
            path.display()
        );
        board
    } else {
        let seed = args.seed.unwrap_or_else(rand::random);
        println!(
            "Generating {}x{} level with seed {}",
            args.width, args.height, seed
        );
        let mut rng = DungeonRng::new(seed);
        let config = GenConfig::default();
        let grid = generate_dungeon(args.width, args.height, &config, &mut rng)?;
        Board::from_grid(&grid)
    };

    if args.reveal {
        print!("{}", render_revealed(&board));
    } else {
        print!("{board}");
    }

    if args.stats {
        let tiles = board.width() * board.height();
        let open = board.open_count();
        println!(
            "{}x{} tiles, {} open ({:.1}%)",
            board.width(),
            board.height(),
            open,
            100.0 * open as f64 / tiles as f64
        );
    }

    if let Some(path) = &args.save {
        fs::write(path, board.to_map_image())?;
        println!("Saved map image to {}", path.display());
    }

    Ok(())
}

// Full render that ignores visibility, for inspecting generation.
fn render_revealed(board: &Board) -> String {
    let mut out = String::with_capacity((board.width() + 1) * board.height());
    for y in 0..board.height() {
        for x in 0..board.width() {
            if let Some(tile) = board.tile(x, y) {
                out.push(tile.kind.symbol());
            }
        }
        out.push('\n');
    }
    out
}
