//! Pixart Core Library
//!
//! Platform-agnostic raster editing engine for the Pixart pixel-art editor:
//! the pixel grid, the painting tools, undo/redo history and the set of open
//! documents.

pub mod color;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod grid;
pub mod history;
pub mod input;
pub mod palette;
pub mod raster;
pub mod tools;

pub use color::Color;
pub use config::EditorConfig;
pub use document::{Document, DocumentSet};
pub use editor::{Editor, NEW_DOCUMENT_PRESETS};
pub use error::{EditorError, EditorResult};
pub use grid::{CellPos, Grid, Pixel, MAX_DIMENSION, MIN_DIMENSION};
pub use history::{History, HistoryEntry, MAX_HISTORY};
pub use input::{coordinates_to_cell, PointerEvent, Viewport};
pub use palette::{Palette, RecentColors, DEFAULT_PALETTE};
pub use raster::{fit_within, RasterAdapter, MAX_IMPORT_DIMENSION};
pub use tools::{
    BrushShape, ClickOutcome, ShapeKind, StrokeResult, ToolKind, ToolManager, ToolSettings, ToolState,
    MAX_BRUSH_SIZE, MIN_BRUSH_SIZE,
};
