//! Pointer input and device-to-cell coordinate mapping.

use crate::grid::CellPos;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Pointer event in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// The pointer left the drawing surface.
    Leave,
    Click { position: Point },
}

impl PointerEvent {
    /// Device position of the event, if it has one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Click { position } => Some(position),
            PointerEvent::Leave => None,
        }
    }
}

/// Map a device point onto a grid cell.
///
/// `bounds` is the on-screen rectangle of the grid and `scale` the size of
/// one cell in device units. Returns `None` outside the grid or when the
/// scale is not positive.
pub fn coordinates_to_cell(point: Point, scale: f64, bounds: Rect, width: u32, height: u32) -> Option<CellPos> {
    if scale <= 0.0 {
        return None;
    }
    let x = ((point.x - bounds.x0) / scale).floor();
    let y = ((point.y - bounds.y0) / scale).floor();
    if x < 0.0 || y < 0.0 || x >= width as f64 || y >= height as f64 {
        return None;
    }
    Some(CellPos::new(x as i32, y as i32))
}

/// On-screen placement of a grid: origin and cell size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub origin: Point,
    pub pixel_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            pixel_size: 16.0,
        }
    }
}

impl Viewport {
    pub fn new(origin: Point, pixel_size: f64) -> Self {
        Self { origin, pixel_size }
    }

    /// Screen rectangle covered by a `width` x `height` grid.
    pub fn grid_bounds(&self, width: u32, height: u32) -> Rect {
        Rect::from_origin_size(
            self.origin,
            (width as f64 * self.pixel_size, height as f64 * self.pixel_size),
        )
    }

    /// Cell under a device point.
    pub fn cell_at(&self, point: Point, width: u32, height: u32) -> Option<CellPos> {
        coordinates_to_cell(point, self.pixel_size, self.grid_bounds(width, height), width, height)
    }

    /// Device position of a cell's top-left corner.
    pub fn cell_origin(&self, pos: CellPos) -> Point {
        Point::new(
            self.origin.x + pos.x as f64 * self.pixel_size,
            self.origin.y + pos.y as f64 * self.pixel_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(scale: f64) -> Rect {
        Rect::new(10.0, 20.0, 10.0 + 32.0 * scale, 20.0 + 32.0 * scale)
    }

    #[test]
    fn test_maps_point_to_cell() {
        let cell = coordinates_to_cell(Point::new(10.0, 20.0), 16.0, bounds(16.0), 32, 32);
        assert_eq!(cell, Some(CellPos::new(0, 0)));

        let cell = coordinates_to_cell(Point::new(10.0 + 16.0 * 3.5, 20.0 + 16.0 * 7.99), 16.0, bounds(16.0), 32, 32);
        assert_eq!(cell, Some(CellPos::new(3, 7)));
    }

    #[test]
    fn test_outside_grid() {
        let b = bounds(16.0);
        assert_eq!(coordinates_to_cell(Point::new(9.0, 30.0), 16.0, b, 32, 32), None);
        assert_eq!(coordinates_to_cell(Point::new(30.0, 19.5), 16.0, b, 32, 32), None);
        assert_eq!(coordinates_to_cell(Point::new(10.0 + 512.0, 30.0), 16.0, b, 32, 32), None);
    }

    #[test]
    fn test_non_positive_scale() {
        let b = bounds(16.0);
        assert_eq!(coordinates_to_cell(Point::new(20.0, 30.0), 0.0, b, 32, 32), None);
        assert_eq!(coordinates_to_cell(Point::new(20.0, 30.0), -4.0, b, 32, 32), None);
    }

    #[test]
    fn test_viewport_roundtrip() {
        let viewport = Viewport::new(Point::new(5.0, 5.0), 8.0);
        let pos = CellPos::new(4, 9);
        let origin = viewport.cell_origin(pos);
        assert_eq!(viewport.cell_at(origin, 16, 16), Some(pos));
        assert_eq!(viewport.cell_at(Point::new(4.9, 5.0), 16, 16), None);
    }

    #[test]
    fn test_leave_has_no_position() {
        assert_eq!(PointerEvent::Leave.position(), None);
        let down = PointerEvent::Down { position: Point::new(1.0, 2.0) };
        assert_eq!(down.position(), Some(Point::new(1.0, 2.0)));
    }
}
