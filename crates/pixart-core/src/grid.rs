//! Pixel grid data model.

use crate::color::Color;
use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Smallest allowed grid side, in cells.
pub const MIN_DIMENSION: u32 = 8;
/// Largest allowed grid side, in cells.
pub const MAX_DIMENSION: u32 = 128;

/// A cell coordinate. Signed so footprints can extend past the grid edges
/// before being clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a delta.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One grid cell: a color and its cached emptiness.
///
/// `is_empty` always equals `color.a == 0`; the only way to build a pixel is
/// from a color, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Color", into = "Color")]
pub struct Pixel {
    color: Color,
    is_empty: bool,
}

impl Pixel {
    /// A fully transparent white pixel.
    pub const EMPTY: Pixel = Pixel {
        color: Color::TRANSPARENT,
        is_empty: true,
    };

    pub fn new(color: Color) -> Self {
        Self {
            color,
            is_empty: color.is_transparent(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl From<Pixel> for Color {
    fn from(pixel: Pixel) -> Self {
        pixel.color
    }
}

/// A `width` x `height` grid of pixels stored row-major.
///
/// Cloning is cheap: clones share storage until one of them is written to,
/// at which point the writer gets its own copy. A grid held by a history
/// entry is therefore never changed by edits made through a clone.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    pixels: Arc<Vec<Pixel>>,
}

impl Grid {
    /// Create a grid of empty pixels.
    pub fn new(width: u32, height: u32) -> EditorResult<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: Arc::new(vec![Pixel::EMPTY; (width * height) as usize]),
        })
    }

    /// Create a grid from row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> EditorResult<Self> {
        validate_dimensions(width, height)?;
        let expected = (width * height) as usize;
        if pixels.len() != expected {
            return Err(EditorError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Create a grid from tightly packed 8-bit RGBA data.
    ///
    /// Alpha is mapped onto `[0, 1]`; pixels with zero alpha are empty.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> EditorResult<Self> {
        validate_dimensions(width, height)?;
        let expected = (width * height) as usize * 4;
        if data.len() != expected {
            return Err(EditorError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| Pixel::new(Color::from_rgba8(px[0], px[1], px[2], px[3])))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check whether a position lies inside the grid.
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Get the pixel at a position, if it is inside the grid.
    pub fn get(&self, pos: CellPos) -> Option<&Pixel> {
        self.index(pos).map(|i| &self.pixels[i])
    }

    /// Get the color at a position, if it is inside the grid.
    pub fn color_at(&self, pos: CellPos) -> Option<Color> {
        self.get(pos).map(Pixel::color)
    }

    /// Overwrite a pixel. Positions outside the grid are ignored.
    ///
    /// Returns true if a pixel was written.
    pub fn set(&mut self, pos: CellPos, color: Color) -> bool {
        match self.index(pos) {
            Some(i) => {
                Arc::make_mut(&mut self.pixels)[i] = Pixel::new(color);
                true
            }
            None => false,
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Number of non-empty pixels.
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_empty()).count()
    }

    /// Whether two grids currently share the same backing storage.
    pub fn shares_storage_with(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    /// Export as tightly packed 8-bit RGBA, one pixel per cell.
    ///
    /// Empty pixels are written fully transparent.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in self.pixels.iter() {
            if pixel.is_empty() {
                data.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                data.extend_from_slice(&pixel.color().to_rgba8());
            }
        }
        data
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

/// Check that a grid size lies within `MIN_DIMENSION..=MAX_DIMENSION`.
pub fn validate_dimensions(width: u32, height: u32) -> EditorResult<()> {
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(EditorError::InvalidDimension { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        for (w, h) in [(8, 8), (32, 32), (17, 128), (128, 9)] {
            let grid = Grid::new(w, h).unwrap();
            assert_eq!(grid.len(), (w * h) as usize);
            assert!(grid.pixels().iter().all(|p| p.is_empty()));
            assert!(grid.pixels().iter().all(|p| p.color() == Color::TRANSPARENT));
            assert_eq!(grid.rows().count(), h as usize);
            assert!(grid.rows().all(|row| row.len() == w as usize));
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(7, 32), (32, 7), (129, 32), (32, 129), (0, 0)] {
            assert_eq!(
                Grid::new(w, h).unwrap_err(),
                EditorError::InvalidDimension { width: w, height: h }
            );
        }
    }

    #[test]
    fn test_pixel_emptiness_follows_alpha() {
        assert!(Pixel::new(Color::new(1, 2, 3, 0.0)).is_empty());
        assert!(!Pixel::new(Color::new(1, 2, 3, 0.01)).is_empty());
        assert!(Pixel::default().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(8, 8).unwrap();
        let red = Color::rgb(255, 0, 0);
        assert!(grid.set(CellPos::new(3, 4), red));
        assert_eq!(grid.color_at(CellPos::new(3, 4)), Some(red));
        assert!(!grid.get(CellPos::new(3, 4)).unwrap().is_empty());
        assert_eq!(grid.painted_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(8, 8).unwrap();
        assert!(grid.get(CellPos::new(-1, 0)).is_none());
        assert!(grid.get(CellPos::new(8, 0)).is_none());
        assert!(grid.get(CellPos::new(0, 8)).is_none());
        assert!(!grid.set(CellPos::new(8, 8), Color::BLACK));
        assert_eq!(grid.painted_count(), 0);
    }

    #[test]
    fn test_clone_is_copy_on_write() {
        let original = Grid::new(8, 8).unwrap();
        let mut copy = original.clone();
        assert!(copy.shares_storage_with(&original));

        copy.set(CellPos::new(0, 0), Color::BLACK);
        assert!(!copy.shares_storage_with(&original));
        assert!(original.get(CellPos::new(0, 0)).unwrap().is_empty());
        assert_ne!(copy, original);
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let err = Grid::from_pixels(8, 8, vec![Pixel::EMPTY; 10]).unwrap_err();
        assert_eq!(err, EditorError::InvalidPixelData { expected: 64, actual: 10 });
    }

    #[test]
    fn test_rgba8_roundtrip_keeps_pixels() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(CellPos::new(1, 1), Color::rgb(255, 0, 0));
        grid.set(CellPos::new(2, 5), Color::new(10, 20, 30, 0.5));

        let data = grid.to_rgba8();
        assert_eq!(data.len(), 8 * 8 * 4);
        assert_eq!(&data[0..4], &[0, 0, 0, 0]);

        let restored = Grid::from_rgba8(8, 8, &data).unwrap();
        assert_eq!(restored.color_at(CellPos::new(1, 1)), Some(Color::rgb(255, 0, 0)));
        assert_eq!(restored.color_at(CellPos::new(2, 5)), Some(Color::new(10, 20, 30, 0.5)));
        assert!(restored.get(CellPos::new(0, 0)).unwrap().is_empty());
    }
}
