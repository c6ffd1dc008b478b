//! Room carving inside leaf regions

use crate::config::GenConfig;
use crate::rng::DungeonRng;

use super::grid::Grid;
use super::region::Rect;

/// Carve one room into a leaf rectangle
///
/// Size and position are drawn so the room always keeps at least one
/// closed cell of margin inside the leaf on every side. The caller
/// guarantees the leaf fits a minimum room plus margins; a leaf at that
/// exact bound collapses every draw to its single legal value.
///
/// Returns the carved room rectangle.
pub(crate) fn place_room(
    grid: &mut Grid,
    rect: Rect,
    config: &GenConfig,
    rng: &mut DungeonRng,
) -> Rect {
    let width = rng.uniform(config.min_room_width, rect.width - 2);
    let height = rng.uniform(config.min_room_height, rect.height - 2);
    let room_x = rng.uniform(rect.x + 1, rect.right() - 1 - width);
    let room_y = rng.uniform(rect.y + 1, rect.bottom() - 1 - height);

    for x in room_x..room_x + width {
        for y in room_y..room_y + height {
            grid.carve(x, y);
        }
    }

    Rect::new(room_x, room_y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_keeps_margins() {
        let config = GenConfig::default();
        let rect = Rect::new(5, 3, 12, 9);

        for seed in 0..50 {
            let mut rng = DungeonRng::new(seed);
            let mut grid = Grid::closed(30, 20);
            let room = place_room(&mut grid, rect, &config, &mut rng);

            assert!(room.width >= config.min_room_width);
            assert!(room.height >= config.min_room_height);
            assert!(room.x > rect.x && room.right() < rect.right());
            assert!(room.y > rect.y && room.bottom() < rect.bottom());

            // Carved cells match the returned rectangle and nothing else.
            for (x, y) in grid.open_cells() {
                assert!(room.contains(x, y), "stray open cell ({x}, {y})");
            }
            assert_eq!(grid.open_count(), room.width * room.height);

            // The leaf's boundary ring stays closed.
            for x in rect.x..rect.right() {
                assert!(!grid.is_open(x, rect.y));
                assert!(!grid.is_open(x, rect.bottom() - 1));
            }
            for y in rect.y..rect.bottom() {
                assert!(!grid.is_open(rect.x, y));
                assert!(!grid.is_open(rect.right() - 1, y));
            }
        }
    }

    #[test]
    fn test_minimal_leaf_has_one_legal_room() {
        // An 8x6 leaf with 6x4 rooms leaves no freedom at all.
        let config = GenConfig::default();
        let mut rng = DungeonRng::new(42);
        let mut grid = Grid::closed(8, 6);

        let room = place_room(&mut grid, Rect::new(0, 0, 8, 6), &config, &mut rng);
        assert_eq!(room, Rect::new(1, 1, 6, 4));
        assert_eq!(grid.open_count(), 24);
    }

    #[test]
    fn test_same_seed_same_room() {
        let config = GenConfig::default();
        let rect = Rect::new(0, 0, 15, 12);

        let mut rng1 = DungeonRng::new(9);
        let mut grid1 = Grid::closed(15, 12);
        let room1 = place_room(&mut grid1, rect, &config, &mut rng1);

        let mut rng2 = DungeonRng::new(9);
        let mut grid2 = Grid::closed(15, 12);
        let room2 = place_room(&mut grid2, rect, &config, &mut rng2);

        assert_eq!(room1, room2);
        assert_eq!(grid1, grid2);
    }
}
