//! Parametric shape stamps.

use super::{clamp_brush_size, ShapeKind};
use crate::color::Color;
use crate::grid::{CellPos, Grid};

/// Face color of the smile stamp.
pub const SMILE_FACE: Color = Color::rgb(255, 221, 51);
/// Eye and mouth color of the smile stamp.
pub const SMILE_FEATURE: Color = Color::BLACK;

/// Cells and colors of a shape stamp centered at `center`.
///
/// The stamp spans `brush_size * 2 + 1` cells, with `brush_size` clamped to
/// the brush range. Positions may fall outside any grid; writing them is the
/// caller's concern.
pub fn shape_cells(
    center: CellPos,
    kind: ShapeKind,
    brush_size: u32,
    filled: bool,
    color: Color,
) -> Vec<(CellPos, Color)> {
    let size = (clamp_brush_size(brush_size) * 2 + 1) as i32;
    let mut cells = Vec::new();

    match kind {
        ShapeKind::Circle | ShapeKind::Smile => {
            let radius = size / 2;
            let outer = radius * radius;
            let inner = (radius - 1) * (radius - 1);
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let dist = dx * dx + dy * dy;
                    let inside = if filled {
                        dist <= outer
                    } else {
                        dist <= outer && dist >= inner
                    };
                    if !inside {
                        continue;
                    }
                    let cell_color = if kind == ShapeKind::Smile {
                        smile_color(dx, dy, radius)
                    } else {
                        color
                    };
                    cells.push((center.offset(dx, dy), cell_color));
                }
            }
        }
        ShapeKind::Square => {
            let half = size / 2;
            push_box(&mut cells, center, half, half, filled, color);
        }
        ShapeKind::Rectangle => {
            push_box(&mut cells, center, size, size / 2, filled, color);
        }
    }

    cells
}

fn push_box(
    cells: &mut Vec<(CellPos, Color)>,
    center: CellPos,
    half_w: i32,
    half_h: i32,
    filled: bool,
    color: Color,
) {
    for dy in -half_h..=half_h {
        for dx in -half_w..=half_w {
            if filled || dx.abs() == half_w || dy.abs() == half_h {
                cells.push((center.offset(dx, dy), color));
            }
        }
    }
}

fn smile_color(dx: i32, dy: i32, radius: i32) -> Color {
    if dx == 0 && dy == 0 {
        return SMILE_FACE;
    }
    let offset = radius / 2;
    let eye = dy == -offset && (dx.abs() == offset || (dx == 0 && radius > 2));
    let mouth = dy == offset && (dx.abs() as f32) < radius as f32 / 2.0;
    if eye || mouth {
        SMILE_FEATURE
    } else {
        SMILE_FACE
    }
}

/// Write a shape stamp into `grid`, overwriting without blending.
pub fn apply_shape(grid: &mut Grid, center: CellPos, kind: ShapeKind, brush_size: u32, filled: bool, color: Color) {
    for (pos, cell_color) in shape_cells(center, kind, brush_size, filled, color) {
        grid.set(pos, cell_color);
    }
}

/// Pure form of [`apply_shape`].
pub fn stamp_shape(grid: &Grid, center: CellPos, kind: ShapeKind, brush_size: u32, filled: bool, color: Color) -> Grid {
    let mut out = grid.clone();
    apply_shape(&mut out, center, kind, brush_size, filled, color);
    out
}
