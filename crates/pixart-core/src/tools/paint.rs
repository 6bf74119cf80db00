//! Pixel painting tools: pencil, eraser, brush, negative and eyedropper.
//!
//! The `apply_*` functions write into a grid the caller owns (the working
//! copy of a stroke). The plain functions are the pure forms: they clone the
//! input and return the edited copy, leaving the original untouched.

use super::footprint::brush_footprint;
use super::BrushShape;
use crate::color::Color;
use crate::grid::{CellPos, Grid};
use std::collections::HashSet;

/// Blend `color` over a single cell.
pub fn apply_pencil(grid: &mut Grid, pos: CellPos, color: Color) {
    if let Some(existing) = grid.color_at(pos) {
        grid.set(pos, Color::blend(color, existing));
    }
}

/// Clear a single cell to transparent.
pub fn apply_eraser(grid: &mut Grid, pos: CellPos) {
    grid.set(pos, Color::TRANSPARENT);
}

/// Blend `color` over every cell of the brush footprint.
pub fn apply_brush(grid: &mut Grid, pos: CellPos, color: Color, shape: BrushShape, brush_size: u32) {
    for cell in brush_footprint(grid, pos, shape, brush_size) {
        apply_pencil(grid, cell, color);
    }
}

/// Invert every non-empty cell of the brush footprint.
///
/// Cells already in `inverted` are skipped and newly inverted cells are added
/// to it, so a stroke passing over the same cell twice inverts it once.
pub fn apply_negative(
    grid: &mut Grid,
    pos: CellPos,
    shape: BrushShape,
    brush_size: u32,
    inverted: &mut HashSet<CellPos>,
) {
    for cell in brush_footprint(grid, pos, shape, brush_size) {
        let Some(pixel) = grid.get(cell).copied() else {
            continue;
        };
        if pixel.is_empty() || inverted.contains(&cell) {
            continue;
        }
        grid.set(cell, pixel.color().invert());
        inverted.insert(cell);
    }
}

/// Pencil: blend `color` over one cell.
pub fn pencil(grid: &Grid, pos: CellPos, color: Color) -> Grid {
    let mut out = grid.clone();
    apply_pencil(&mut out, pos, color);
    out
}

/// Eraser: make one cell transparent.
pub fn eraser(grid: &Grid, pos: CellPos) -> Grid {
    let mut out = grid.clone();
    apply_eraser(&mut out, pos);
    out
}

/// Brush: blend `color` over the footprint centered at `pos`.
pub fn brush(grid: &Grid, pos: CellPos, color: Color, shape: BrushShape, brush_size: u32) -> Grid {
    let mut out = grid.clone();
    apply_brush(&mut out, pos, color, shape, brush_size);
    out
}

/// Negative: invert the non-empty cells of the footprint centered at `pos`.
pub fn negative(grid: &Grid, pos: CellPos, shape: BrushShape, brush_size: u32) -> Grid {
    let mut out = grid.clone();
    apply_negative(&mut out, pos, shape, brush_size, &mut HashSet::new());
    out
}

/// Eyedropper: the color under `pos`, if that cell is painted.
pub fn eyedropper(grid: &Grid, pos: CellPos) -> Option<Color> {
    grid.get(pos).filter(|p| !p.is_empty()).map(|p| p.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_pencil_paints_single_cell() {
        let grid = Grid::new(8, 8).unwrap();
        let out = pencil(&grid, CellPos::new(1, 1), RED);

        let pixel = out.get(CellPos::new(1, 1)).unwrap();
        assert_eq!(pixel.color(), RED);
        assert!(!pixel.is_empty());
        assert_eq!(out.painted_count(), 1);
        // Input untouched.
        assert_eq!(grid.painted_count(), 0);
    }

    #[test]
    fn test_pencil_blends_translucent() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(2, 2), Color::WHITE);
        let out = pencil(&grid, CellPos::new(2, 2), Color::new(0, 0, 0, 0.5));

        let color = out.color_at(CellPos::new(2, 2)).unwrap();
        assert!((127..=128).contains(&color.r));
        assert_eq!(color.r, color.g);
        assert_eq!(color.g, color.b);
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pencil_outside_is_noop() {
        let grid = Grid::new(8, 8).unwrap();
        let out = pencil(&grid, CellPos::new(-1, 3), RED);
        assert_eq!(out, grid);
    }

    #[test]
    fn test_eraser_clears() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(0, 0), RED);
        let out = eraser(&grid, CellPos::new(0, 0));
        let pixel = out.get(CellPos::new(0, 0)).unwrap();
        assert!(pixel.is_empty());
        assert_eq!(pixel.color(), Color::TRANSPARENT);
    }

    #[test]
    fn test_brush_square_covers_box() {
        let grid = Grid::new(8, 8).unwrap();
        let out = brush(&grid, CellPos::new(4, 4), RED, BrushShape::Square, 3);
        assert_eq!(out.painted_count(), 9);
    }

    #[test]
    fn test_brush_at_corner_stays_in_bounds() {
        let grid = Grid::new(8, 8).unwrap();
        let out = brush(&grid, CellPos::new(0, 0), RED, BrushShape::Square, 5);
        assert_eq!(out.painted_count(), 9);
        let out = brush(&grid, CellPos::new(7, 7), RED, BrushShape::Circle, 5);
        assert_eq!(out.len(), 64);
        assert!(out.painted_count() > 0);
    }

    #[test]
    fn test_negative_skips_empty_and_inverts_painted() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(4, 4), Color::rgb(10, 20, 30));
        let out = negative(&grid, CellPos::new(4, 4), BrushShape::Square, 3);

        assert_eq!(out.color_at(CellPos::new(4, 4)), Some(Color::rgb(245, 235, 225)));
        assert_eq!(out.painted_count(), 1);
        assert!(out.get(CellPos::new(3, 3)).unwrap().is_empty());
    }

    #[test]
    fn test_negative_twice_in_separate_strokes_restores() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(4, 4), Color::rgb(10, 20, 30));
        let once = negative(&grid, CellPos::new(4, 4), BrushShape::Circle, 1);
        let twice = negative(&once, CellPos::new(4, 4), BrushShape::Circle, 1);
        assert_eq!(twice, grid);
    }

    #[test]
    fn test_negative_once_per_stroke() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(4, 4), Color::rgb(10, 20, 30));
        let mut inverted = HashSet::new();
        // Overlapping footprints centered on neighbouring cells.
        apply_negative(&mut grid, CellPos::new(4, 4), BrushShape::Square, 3, &mut inverted);
        apply_negative(&mut grid, CellPos::new(5, 4), BrushShape::Square, 3, &mut inverted);
        assert_eq!(grid.color_at(CellPos::new(4, 4)), Some(Color::rgb(245, 235, 225)));
    }

    #[test]
    fn test_eyedropper() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(1, 2), RED);
        assert_eq!(eyedropper(&grid, CellPos::new(1, 2)), Some(RED));
        assert_eq!(eyedropper(&grid, CellPos::new(0, 0)), None);
        assert_eq!(eyedropper(&grid, CellPos::new(99, 0)), None);
    }
}
