//! Corridor carving and sibling assimilation
//!
//! Collapses the partition tree from the bottom up: each internal node
//! joins its two children with a dogleg corridor and becomes a leaf,
//! until the root presents the whole board as one merged region.

use crate::config::GenConfig;
use crate::rng::DungeonRng;

use super::grid::Grid;
use super::region::{Rect, Region};
use super::room::place_room;

/// Open-cell tally used by anchor sampling
///
/// Counts open cells in the 3x3 block centered on (x, y), clipped at the
/// grid edge, then subtracts one. For an open point this equals its true
/// 8-neighbor count. For a closed point it reports one less than the
/// true count; anchor acceptance depends on that exact off-by-one, so do
/// not replace this with a plain neighbor count.
pub(crate) fn neighbor_tally(grid: &Grid, x: usize, y: usize) -> i32 {
    let mut open = 0;
    for tx in x.saturating_sub(1)..=(x + 1).min(grid.width() - 1) {
        for ty in y.saturating_sub(1)..=(y + 1).min(grid.height() - 1) {
            if grid.is_open(tx, ty) {
                open += 1;
            }
        }
    }
    open - 1
}

/// Sample a corridor anchor inside a child rectangle
///
/// Draws uniform points until one is open or has a tally of exactly 3.
/// A closed point passes only where merged corridor geometry gives it
/// four true open neighbors, so carving toward it still reaches the
/// region's open space.
fn pick_anchor(grid: &Grid, rect: Rect, rng: &mut DungeonRng) -> (usize, usize) {
    loop {
        let x = rng.uniform(rect.x, rect.right());
        let y = rng.uniform(rect.y, rect.bottom());
        if grid.is_open(x, y) || neighbor_tally(grid, x, y) == 3 {
            return (x, y);
        }
    }
}

/// Carve a dogleg corridor from (ax, ay) to (bx, by)
///
/// On the same row this is a straight horizontal run from `ax` toward
/// `bx` with the far endpoint left untouched. Otherwise the vertical leg
/// is carved at column `ax` across both rows inclusive, and the call
/// recurses with the point moved to `(ax, by)`, so the horizontal leg
/// always lands on the far endpoint's row.
pub(crate) fn carve_tunnel(grid: &mut Grid, ax: usize, ay: usize, bx: usize, by: usize) {
    if ay == by {
        if ax < bx {
            for x in ax..bx {
                grid.carve(x, ay);
            }
        } else if ax > bx {
            for x in (bx + 1)..=ax {
                grid.carve(x, ay);
            }
        }
        return;
    }

    let (top, bottom) = if ay < by { (ay, by) } else { (by, ay) };
    for y in top..=bottom {
        grid.carve(ax, y);
    }
    carve_tunnel(grid, ax, by, bx, by);
}

/// Post-order fill of the partition tree
///
/// Leaves get one room each. An internal node fills both children, picks
/// an anchor in each, carves the connecting corridor, and collapses to a
/// leaf, leaving its merged cells for the parent to connect in turn.
pub(crate) fn fill(
    region: &mut Region,
    grid: &mut Grid,
    config: &GenConfig,
    rng: &mut DungeonRng,
) {
    if region.is_leaf() {
        place_room(grid, region.rect(), config, rng);
        return;
    }

    let Some((first, second)) = region.children_mut() else {
        return;
    };
    fill(first, grid, config, rng);
    fill(second, grid, config, rng);
    let first_rect = first.rect();
    let second_rect = second.rect();

    let (ax, ay) = pick_anchor(grid, first_rect, rng);
    let (bx, by) = pick_anchor(grid, second_rect, rng);
    carve_tunnel(grid, ax, ay, bx, by);

    region.collapse();
}
