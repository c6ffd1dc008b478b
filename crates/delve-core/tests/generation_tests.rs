use delve_core::board::{Board, Interaction};
use delve_core::dungeon::{Grid, generate_default, generate_dungeon};
use delve_core::{BOARD_HEIGHT, BOARD_WIDTH, DungeonRng, GenConfig};
use proptest::prelude::*;

// 8-connected flood fill from the first open cell.
fn flooded_open_cells(grid: &Grid) -> usize {
    let Some(start) = grid.open_cells().next() else {
        return 0;
    };
    let mut seen = vec![vec![false; grid.height()]; grid.width()];
    let mut stack = vec![start];
    seen[start.0][start.1] = true;
    let mut count = 0;
    while let Some((x, y)) = stack.pop() {
        count += 1;
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if grid.is_open(nx, ny) && !seen[nx][ny] {
                    seen[nx][ny] = true;
                    stack.push((nx, ny));
                }
            }
        }
    }
    count
}

#[test]
fn test_default_levels_are_fully_connected() {
    for seed in [1, 2, 3, 5, 7, 11, 42, 99, 1234, 4096, 65537, 987654, u64::MAX] {
        let mut rng = DungeonRng::new(seed);
        let grid = generate_default(&mut rng);
        assert_eq!(grid.width(), BOARD_WIDTH);
        assert_eq!(grid.height(), BOARD_HEIGHT);
        assert!(grid.open_count() > 0, "seed {seed} carved nothing");
        assert_eq!(
            flooded_open_cells(&grid),
            grid.open_count(),
            "seed {seed} left a stranded area"
        );
    }
}

#[test]
fn test_custom_sizes_are_fully_connected() {
    let config = GenConfig::default();
    for (width, height) in [(40, 30), (60, 21), (120, 50)] {
        for seed in [8, 16, 32] {
            let mut rng = DungeonRng::new(seed);
            let grid = generate_dungeon(width, height, &config, &mut rng).unwrap();
            assert_eq!(grid.width(), width);
            assert_eq!(grid.height(), height);
            assert_eq!(flooded_open_cells(&grid), grid.open_count());
        }
    }
}

#[test]
fn test_undersized_board_is_rejected() {
    let config = GenConfig::default();
    let mut rng = DungeonRng::new(5);
    assert!(generate_dungeon(3, 50, &config, &mut rng).is_err());
    assert!(generate_dungeon(50, 2, &config, &mut rng).is_err());
}

#[test]
fn test_walking_a_generated_level() {
    let mut rng = DungeonRng::new(9);
    let grid = generate_default(&mut rng);
    let board = Board::from_grid(&grid);
    for (x, y) in grid.open_cells() {
        assert_eq!(board.interact(x, y), Interaction::Enter);
    }
    assert_eq!(board.interact(board.width(), 0), Interaction::OutOfBounds);
    assert_eq!(board.interact(0, board.height()), Interaction::OutOfBounds);
}

#[test]
fn test_saved_image_restores_the_level() {
    let mut rng = DungeonRng::new(2024);
    let grid = generate_default(&mut rng);
    let board = Board::from_grid(&grid);

    let image = board.to_map_image();
    let restored = Board::from_map_image(&image).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.to_grid(), grid);
}

#[test]
fn test_same_seed_reproduces_the_whole_pipeline() {
    let mut first = DungeonRng::new(31337);
    let mut second = DungeonRng::new(31337);
    let board_a = Board::from_grid(&generate_default(&mut first));
    let board_b = Board::from_grid(&generate_default(&mut second));
    assert_eq!(board_a, board_b);
    assert_eq!(board_a.random_open(&mut first), board_b.random_open(&mut second));
}

proptest! {
    #[test]
    fn uniform_stays_in_range(seed in any::<u64>(), lower in 0usize..500, span in 1usize..500) {
        let mut rng = DungeonRng::new(seed);
        let upper = lower + span;
        let drawn = rng.uniform(lower, upper);
        prop_assert!(drawn >= lower);
        prop_assert!(drawn < upper);
    }

    #[test]
    fn collapsed_uniform_returns_lower(seed in any::<u64>(), lower in 0usize..1000, upper in 0usize..1000) {
        prop_assume!(upper <= lower);
        let mut rng = DungeonRng::new(seed);
        prop_assert_eq!(rng.uniform(lower, upper), lower);
    }

    #[test]
    fn generated_levels_keep_the_border_closed(seed in any::<u64>()) {
        let mut rng = DungeonRng::new(seed);
        let grid = generate_default(&mut rng);
        for x in 0..grid.width() {
            prop_assert!(!grid.is_open(x, 0));
            prop_assert!(!grid.is_open(x, grid.height() - 1));
        }
        for y in 0..grid.height() {
            prop_assert!(!grid.is_open(0, y));
            prop_assert!(!grid.is_open(grid.width() - 1, y));
        }
    }

    #[test]
    fn boards_preserve_the_generated_pattern(seed in any::<u64>()) {
        let mut rng = DungeonRng::new(seed);
        let grid = generate_default(&mut rng);
        let board = Board::from_grid(&grid);
        prop_assert_eq!(board.open_count(), grid.open_count());
        prop_assert_eq!(board.to_grid(), grid);
    }

    #[test]
    fn map_images_survive_reimport(seed in any::<u64>()) {
        let mut rng = DungeonRng::new(seed);
        let board = Board::from_grid(&generate_default(&mut rng));
        let image = board.to_map_image();
        let restored = Board::from_map_image(&image).unwrap();
        prop_assert_eq!(&restored, &board);
        prop_assert_eq!(restored.to_map_image(), image);
    }
}
