//! PNG import/export.

use image::imageops::FilterType;
use pixart_core::{fit_within, EditorError, Grid, RasterAdapter, MAX_IMPORT_DIMENSION, MIN_DIMENSION};
use thiserror::Error;

/// Raster import/export errors.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Encode tightly packed RGBA8 data as a PNG.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, png::EncodingError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba_data)?;
    }
    Ok(png_data)
}

/// Imports any image format the `image` crate decodes; exports PNG at one
/// pixel per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngAdapter {
    max_dimension: u32,
}

impl Default for PngAdapter {
    fn default() -> Self {
        Self {
            max_dimension: MAX_IMPORT_DIMENSION,
        }
    }
}

impl PngAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit imports to `max` cells per side, clamped to the grid size range.
    pub fn with_max_dimension(max: u32) -> Self {
        Self {
            max_dimension: max.clamp(MIN_DIMENSION, MAX_IMPORT_DIMENSION),
        }
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }
}

impl RasterAdapter for PngAdapter {
    type Error = RasterError;

    fn import(&self, bytes: &[u8]) -> Result<Grid, RasterError> {
        let decoded = image::load_from_memory(bytes)?;
        let (src_w, src_h) = (decoded.width(), decoded.height());
        let (width, height) = fit_within(src_w, src_h, self.max_dimension);

        let rgba = if (width, height) == (src_w, src_h) {
            decoded.to_rgba8()
        } else {
            decoded.resize_exact(width, height, FilterType::Triangle).to_rgba8()
        };
        log::info!("Imported {}x{} image as {}x{} grid", src_w, src_h, width, height);

        Ok(Grid::from_rgba8(width, height, rgba.as_raw())?)
    }

    fn export(&self, grid: &Grid) -> Result<Vec<u8>, RasterError> {
        let png = encode_png(&grid.to_rgba8(), grid.width(), grid.height())?;
        log::info!("Exported {}x{} grid ({} bytes)", grid.width(), grid.height(), png.len());
        Ok(png)
    }
}
