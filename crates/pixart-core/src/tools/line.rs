//! Integer line rasterization used to join stroke samples.

use crate::grid::CellPos;

/// Bresenham's line algorithm.
///
/// Returns every cell on the line from `from` to `to`, both endpoints
/// included, so fast pointer movement still produces a connected stroke.
pub fn line_cells(from: CellPos, to: CellPos) -> Vec<CellPos> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let mut x = from.x;
    let mut y = from.y;

    loop {
        cells.push(CellPos::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    cells
}
