//! Partition rectangles and the region tree

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with half-open extents
///
/// Covers `[x, x + width)` horizontally and `[y, y + height)` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left x coordinate
    pub x: usize,
    /// Top y coordinate
    pub y: usize,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Whether the point lies inside the rectangle
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A node in the partition tree
///
/// Regions own their children outright; there are no parent links.
/// Collapsing an internal node back to a leaf drops the subtree, which is
/// how corridor assimilation walks the tree up to a single root leaf.
#[derive(Debug, Clone)]
pub struct Region {
    rect: Rect,
    state: RegionState,
}

#[derive(Debug, Clone)]
enum RegionState {
    Leaf,
    Split {
        first: Box<Region>,
        second: Box<Region>,
    },
}

impl Region {
    /// Create an unsplit region covering the given rectangle
    pub const fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            state: RegionState::Leaf,
        }
    }

    /// Create the root region for a board
    pub const fn root(width: usize, height: usize) -> Self {
        Self::leaf(Rect::new(0, 0, width, height))
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.state, RegionState::Leaf)
    }

    /// Turn this leaf into an internal node with the given children
    pub(crate) fn split_into(&mut self, first: Region, second: Region) {
        self.state = RegionState::Split {
            first: Box::new(first),
            second: Box::new(second),
        };
    }

    /// Both children of an internal node, first then second
    pub fn children(&self) -> Option<(&Region, &Region)> {
        match &self.state {
            RegionState::Leaf => None,
            RegionState::Split { first, second } => Some((first, second)),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<(&mut Region, &mut Region)> {
        match &mut self.state {
            RegionState::Leaf => None,
            RegionState::Split { first, second } => Some((first, second)),
        }
    }

    /// Collapse an internal node back into a leaf, dropping the subtree
    pub(crate) fn collapse(&mut self) {
        self.state = RegionState::Leaf;
    }

    /// Rectangles of all leaves under this node, in tree order
    pub fn leaf_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::new();
        self.collect_leaf_rects(&mut rects);
        rects
    }

    fn collect_leaf_rects(&self, out: &mut Vec<Rect>) {
        match &self.state {
            RegionState::Leaf => out.push(self.rect),
            RegionState::Split { first, second } => {
                first.collect_leaf_rects(out);
                second.collect_leaf_rects(out);
            }
        }
    }
}
