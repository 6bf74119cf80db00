//! Editor configuration.

use crate::error::{EditorError, EditorResult};
use crate::grid::validate_dimensions;
use crate::history::MAX_HISTORY;
use crate::palette::DEFAULT_RECENT_CAPACITY;
use crate::raster::MAX_IMPORT_DIMENSION;
use crate::tools::{BrushShape, ToolSettings, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest on-screen cell size.
pub const MIN_PIXEL_SIZE: u32 = 8;
/// Largest on-screen cell size.
pub const MAX_PIXEL_SIZE: u32 = 32;
/// Zoom step for the on-screen cell size.
pub const PIXEL_SIZE_STEP: u32 = 2;

/// Editor configuration. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Size of the first canvas.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Snapshots kept per document.
    pub history_capacity: usize,
    /// Initial on-screen cell size.
    pub pixel_size: u32,
    pub brush_size: u32,
    pub brush_shape: BrushShape,
    pub recent_colors_capacity: usize,
    /// Largest side of an imported image, in cells.
    pub max_import_dimension: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 32,
            canvas_height: 32,
            history_capacity: MAX_HISTORY,
            pixel_size: 16,
            brush_size: 3,
            brush_shape: BrushShape::Circle,
            recent_colors_capacity: DEFAULT_RECENT_CAPACITY,
            max_import_dimension: MAX_IMPORT_DIMENSION,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EditorError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Check the values against the editor's limits.
    pub fn validate(&self) -> EditorResult<()> {
        validate_dimensions(self.canvas_width, self.canvas_height)?;
        if self.history_capacity == 0 {
            return Err(EditorError::Config("history_capacity must be at least 1".to_string()));
        }
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.brush_size) {
            return Err(EditorError::Config(format!(
                "brush_size must be between {} and {}",
                MIN_BRUSH_SIZE, MAX_BRUSH_SIZE
            )));
        }
        if self.max_import_dimension == 0 {
            return Err(EditorError::Config("max_import_dimension must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The configured pixel size, snapped to the zoom range and step.
    pub fn clamped_pixel_size(&self) -> u32 {
        clamp_pixel_size(self.pixel_size)
    }

    /// Initial tool settings.
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            brush_shape: self.brush_shape,
            brush_size: self.brush_size,
            ..ToolSettings::default()
        }
    }
}

/// Clamp a cell size to `MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE`, rounded down to
/// the zoom step.
pub fn clamp_pixel_size(size: u32) -> u32 {
    let size = size.clamp(MIN_PIXEL_SIZE, MAX_PIXEL_SIZE);
    size - (size - MIN_PIXEL_SIZE) % PIXEL_SIZE_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!((config.canvas_width, config.canvas_height), (32, 32));
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.pixel_size, 16);
        assert_eq!(config.brush_size, 3);
        assert_eq!(config.recent_colors_capacity, 8);
        assert_eq!(config.max_import_dimension, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = EditorConfig::from_json(r#"{"canvas_width": 64, "brush_shape": "Square"}"#).unwrap();
        assert_eq!(config.canvas_width, 64);
        assert_eq!(config.canvas_height, 32);
        assert_eq!(config.brush_shape, BrushShape::Square);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(EditorConfig::from_json("{ nope"), Err(EditorError::Config(_))));
        assert_eq!(
            EditorConfig::from_json(r#"{"canvas_width": 4}"#).unwrap_err(),
            EditorError::InvalidDimension { width: 4, height: 32 }
        );
        assert!(matches!(
            EditorConfig::from_json(r#"{"history_capacity": 0}"#),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn test_brush_size_range() {
        for size in [0u64, 11, 4_294_967_295] {
            let json = format!(r#"{{"brush_size": {}}}"#, size);
            assert!(matches!(EditorConfig::from_json(&json), Err(EditorError::Config(_))));
        }
        for size in [1, 10] {
            let json = format!(r#"{{"brush_size": {}}}"#, size);
            assert_eq!(EditorConfig::from_json(&json).unwrap().brush_size, size);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pixel_size": 20, "recent_colors_capacity": 4}}"#).unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.pixel_size, 20);
        assert_eq!(config.recent_colors_capacity, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EditorConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(EditorError::Config(_))));
    }

    #[test]
    fn test_clamp_pixel_size() {
        assert_eq!(clamp_pixel_size(2), 8);
        assert_eq!(clamp_pixel_size(16), 16);
        assert_eq!(clamp_pixel_size(17), 16);
        assert_eq!(clamp_pixel_size(100), 32);
    }
}
