//! Pixart Render Library
//!
//! Software rendering of pixel grids and PNG import/export.

mod png_adapter;
mod renderer;

pub use png_adapter::{encode_png, PngAdapter, RasterError};
pub use renderer::{GridStyle, Pixmap, RenderContext, RenderResult, Renderer, RendererError, SoftwareRenderer};
