//! Raster import/export boundary.

use crate::grid::Grid;

/// Largest side of an imported image, in cells.
pub const MAX_IMPORT_DIMENSION: u32 = 128;

/// Scale `width` x `height` down to fit within `max` x `max`, keeping the
/// aspect ratio. Sizes already within the limit are returned unchanged.
///
/// Scaled sides are floored and never drop below 1.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    // The longer side becomes exactly `max`; integer division floors the other.
    let scaled = |side: u32, long: u32| ((side as u64 * max as u64 / long as u64) as u32).max(1);
    if width >= height {
        (max, scaled(height, width))
    } else {
        (scaled(width, height), max)
    }
}

/// Converts between encoded image bytes and grids.
///
/// Imports produce a grid of at most [`MAX_IMPORT_DIMENSION`] cells per side;
/// exports write one image pixel per cell with alpha preserved.
pub trait RasterAdapter {
    type Error: std::error::Error;

    /// Decode an encoded image into a grid.
    fn import(&self, bytes: &[u8]) -> Result<Grid, Self::Error>;

    /// Encode a grid as an image.
    fn export(&self, grid: &Grid) -> Result<Vec<u8>, Self::Error>;
}
