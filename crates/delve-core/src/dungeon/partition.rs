//! Recursive binary space partitioning
//!
//! Splits the board rectangle into a tree of regions. Each cut keeps both
//! children at or above the configured minimum, and a region stops
//! splitting once the dimension it was about to cut falls below the
//! max-leaf threshold.

use crate::config::GenConfig;
use crate::rng::DungeonRng;

use super::region::{Rect, Region};

/// Cut orientation for a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cut the width, producing left and right children
    Vertical,
    /// Cut the height, producing top and bottom children
    Horizontal,
}

/// Decide which way to cut a region
///
/// Thin regions are forced to cut their long dimension so children never
/// crowd the minimum; otherwise it is a coin flip.
pub(crate) fn decide_axis(rect: Rect, config: &GenConfig, rng: &mut DungeonRng) -> Axis {
    if rect.width <= config.override_width {
        Axis::Horizontal
    } else if rect.height <= config.override_height {
        Axis::Vertical
    } else if rng.one_in(2) {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Recursively partition a region
///
/// The axis is decided before the leaf check, so a region that ends up a
/// leaf may still have consumed the coin flip.
pub(crate) fn split(region: &mut Region, config: &GenConfig, rng: &mut DungeonRng) {
    match decide_axis(region.rect(), config, rng) {
        Axis::Vertical => split_width(region, config, rng),
        Axis::Horizontal => split_height(region, config, rng),
    }
}

fn split_width(region: &mut Region, config: &GenConfig, rng: &mut DungeonRng) {
    let rect = region.rect();
    if rect.width < config.max_leaf_width {
        return;
    }

    // Rejection-sample the cut until both children clear the minimum.
    let left_width = loop {
        let left_width = rng.uniform(config.min_width, rect.width / 2);
        let right_width = rect.width - left_width;
        if left_width >= config.min_width && right_width >= config.min_width {
            break left_width;
        }
    };

    let mut left = Region::leaf(Rect::new(rect.x, rect.y, left_width, rect.height));
    let mut right = Region::leaf(Rect::new(
        rect.x + left_width,
        rect.y,
        rect.width - left_width,
        rect.height,
    ));
    split(&mut left, config, rng);
    split(&mut right, config, rng);

    // First child is the right half: assimilation anchors its vertical
    // corridor leg in the first child.
    region.split_into(right, left);
}

fn split_height(region: &mut Region, config: &GenConfig, rng: &mut DungeonRng) {
    let rect = region.rect();
    if rect.height < config.max_leaf_height {
        return;
    }

    let top_height = loop {
        let top_height = rng.uniform(config.min_height, rect.height / 2);
        let bottom_height = rect.height - top_height;
        if top_height >= config.min_height && bottom_height >= config.min_height {
            break top_height;
        }
    };

    let mut top = Region::leaf(Rect::new(rect.x, rect.y, rect.width, top_height));
    let mut bottom = Region::leaf(Rect::new(
        rect.x,
        rect.y + top_height,
        rect.width,
        rect.height - top_height,
    ));
    split(&mut top, config, rng);
    split(&mut bottom, config, rng);

    // First child is the top half.
    region.split_into(top, bottom);
}
