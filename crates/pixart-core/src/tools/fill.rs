//! Flood fill.

use crate::color::Color;
use crate::grid::{CellPos, Grid};
use std::collections::{HashSet, VecDeque};

/// Cells reachable from `start` through 4-connected neighbours whose color
/// equals the start cell's color. Empty if `start` is outside the grid.
pub fn flood_region(grid: &Grid, start: CellPos) -> HashSet<CellPos> {
    let mut region = HashSet::new();
    let Some(target) = grid.color_at(start) else {
        return region;
    };

    let mut queue = VecDeque::new();
    queue.push_back(start);
    region.insert(start);

    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = pos.offset(dx, dy);
            if region.contains(&next) {
                continue;
            }
            if grid.color_at(next) == Some(target) {
                region.insert(next);
                queue.push_back(next);
            }
        }
    }

    region
}

/// Repaint the region around `start` with `color`.
///
/// Filling a region that already has the fill color leaves the grid as is.
pub fn flood_fill(grid: &Grid, start: CellPos, color: Color) -> Grid {
    let mut out = grid.clone();
    match grid.color_at(start) {
        Some(existing) if existing != color => {
            for pos in flood_region(grid, start) {
                out.set(pos, color);
            }
        }
        _ => {}
    }
    out
}
