//! Brush footprints.

use super::BrushShape;
use crate::grid::{CellPos, Grid};

/// Cells covered by a brush of `brush_size` centered at `center`.
///
/// The radius is `brush_size / 2` (rounded down). Circle brushes keep the
/// cells with `dx² + dy² <= r²`, square brushes the whole box. Only the part
/// of the box inside the grid is visited.
pub fn brush_footprint(grid: &Grid, center: CellPos, shape: BrushShape, brush_size: u32) -> Vec<CellPos> {
    let radius = i64::from(brush_size / 2);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let x0 = (cx - radius).max(0);
    let y0 = (cy - radius).max(0);
    let x1 = (cx + radius).min(i64::from(grid.width()) - 1);
    let y1 = (cy + radius).min(i64::from(grid.height()) - 1);

    let mut cells = Vec::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = (x - cx, y - cy);
            let inside = match shape {
                BrushShape::Circle => dx * dx + dy * dy <= radius * radius,
                BrushShape::Square => true,
            };
            if inside {
                // Clipped to the grid, so both fit in i32.
                cells.push(CellPos::new(x as i32, y as i32));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_one_is_single_cell() {
        let grid = Grid::new(8, 8).unwrap();
        let cells = brush_footprint(&grid, CellPos::new(4, 4), BrushShape::Circle, 1);
        assert_eq!(cells, vec![CellPos::new(4, 4)]);
    }

    #[test]
    fn test_circle_radius_one_is_plus() {
        let grid = Grid::new(8, 8).unwrap();
        let cells = brush_footprint(&grid, CellPos::new(4, 4), BrushShape::Circle, 3);
        assert_eq!(cells.len(), 5);
        assert!(!cells.contains(&CellPos::new(3, 3)));
        assert!(cells.contains(&CellPos::new(4, 3)));
    }

    #[test]
    fn test_square_fills_box() {
        let grid = Grid::new(8, 8).unwrap();
        let cells = brush_footprint(&grid, CellPos::new(4, 4), BrushShape::Square, 5);
        assert_eq!(cells.len(), 25);
    }

    #[test]
    fn test_clipped_at_corner() {
        let grid = Grid::new(8, 8).unwrap();
        let cells = brush_footprint(&grid, CellPos::new(0, 0), BrushShape::Square, 5);
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|&c| grid.contains(c)));

        let cells = brush_footprint(&grid, CellPos::new(7, 7), BrushShape::Circle, 9);
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn test_huge_size_stays_clipped() {
        let grid = Grid::new(8, 8).unwrap();
        let cells = brush_footprint(&grid, CellPos::new(3, 3), BrushShape::Square, u32::MAX);
        assert_eq!(cells.len(), 64);
        let cells = brush_footprint(&grid, CellPos::new(3, 3), BrushShape::Circle, u32::MAX);
        assert_eq!(cells.len(), 64);
    }
}
