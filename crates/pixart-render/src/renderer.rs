//! Renderer trait and the software render surface.

use kurbo::{Point, Rect};
use peniko::Color;
use pixart_core::{CellPos, Grid, Viewport};
use thiserror::Error;

use crate::png_adapter::encode_png;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// No grid lines.
    None,
    /// A line on every cell boundary.
    #[default]
    Lines,
}

impl GridStyle {
    /// Toggle between the styles.
    pub fn next(self) -> Self {
        match self {
            GridStyle::None => GridStyle::Lines,
            GridStyle::Lines => GridStyle::None,
        }
    }

    /// Get display name for this grid style.
    pub fn name(self) -> &'static str {
        match self {
            GridStyle::None => "None",
            GridStyle::Lines => "Lines",
        }
    }
}

/// Context for rendering one frame.
pub struct RenderContext<'a> {
    /// The grid to render.
    pub grid: &'a Grid,
    /// Size of one cell in device pixels.
    pub pixel_size: u32,
    /// Base color of the transparency checkerboard.
    pub background_color: Color,
    /// Color of the lighter checkerboard cells.
    pub checker_color: Color,
    /// Grid display style.
    pub grid_style: GridStyle,
    /// Grid line color.
    pub grid_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(grid: &'a Grid, pixel_size: u32) -> Self {
        Self {
            grid,
            pixel_size,
            background_color: Color::from_rgba8(240, 240, 240, 255),
            checker_color: Color::from_rgba8(255, 255, 255, 255),
            grid_style: GridStyle::Lines,
            grid_color: Color::from_rgba8(224, 224, 224, 128),
        }
    }

    /// Set the cell size.
    pub fn with_pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Set the checkerboard base color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the grid style.
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Set the grid line color.
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    /// Size of the rendered surface in device pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.grid.width() * self.pixel_size, self.grid.height() * self.pixel_size)
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Draw a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// An RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a transparent pixmap.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RendererError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(x, y)`, if inside.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Composite `color` over every pixel inside `rect`, clipped to the pixmap.
    pub fn fill_rect(&mut self, rect: Rect, color: pixart_core::Color) {
        let x0 = rect.x0.max(0.0).round() as u32;
        let y0 = rect.y0.max(0.0).round() as u32;
        let x1 = (rect.x1.round().max(0.0) as u32).min(self.width);
        let y1 = (rect.y1.round().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let i = ((y * self.width + x) * 4) as usize;
                let px = &mut self.data[i..i + 4];
                let below = pixart_core::Color::from_rgba8(px[0], px[1], px[2], px[3]);
                px.copy_from_slice(&pixart_core::Color::blend(color, below).to_rgba8());
            }
        }
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        Ok(encode_png(&self.data, self.width, self.height)?)
    }
}

/// CPU renderer drawing into a [`Pixmap`].
#[derive(Debug, Default)]
pub struct SoftwareRenderer {
    pixmap: Option<Pixmap>,
}

impl SoftwareRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Render a frame and take the result.
    pub fn render(&mut self, ctx: &RenderContext) -> RenderResult<Pixmap> {
        self.build_scene(ctx)?;
        self.pixmap
            .take()
            .ok_or(RendererError::InvalidSize { width: 0, height: 0 })
    }

    fn draw_grid_lines(pixmap: &mut Pixmap, ctx: &RenderContext, viewport: &Viewport) {
        let color = pixart_core::Color::from(ctx.grid_color);
        let (width, height) = (pixmap.width() as f64, pixmap.height() as f64);
        let last_x = (pixmap.width() - 1) as f64;
        let last_y = (pixmap.height() - 1) as f64;

        // Cell edges, plus the closing edge on the last device pixel
        for col in 0..=ctx.grid.width() {
            let x = viewport.cell_origin(CellPos::new(col as i32, 0)).x.min(last_x);
            pixmap.fill_rect(Rect::new(x, 0.0, x + 1.0, height), color);
        }
        for row in 0..=ctx.grid.height() {
            let y = viewport.cell_origin(CellPos::new(0, row as i32)).y.min(last_y);
            pixmap.fill_rect(Rect::new(0.0, y, width, y + 1.0), color);
        }
    }
}

impl Renderer for SoftwareRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let (width, height) = ctx.surface_size();
        let mut pixmap = Pixmap::new(width, height)?;
        let viewport = Viewport::new(Point::ZERO, ctx.pixel_size as f64);
        let size = ctx.pixel_size as f64;

        let base = pixart_core::Color::from(self.background_color(ctx));
        let checker = pixart_core::Color::from(ctx.checker_color);

        for (y, row) in ctx.grid.rows().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                let pos = CellPos::new(x as i32, y as i32);
                let cell = Rect::from_origin_size(viewport.cell_origin(pos), (size, size));
                let background = if (x + y) % 2 == 0 { checker } else { base };
                pixmap.fill_rect(cell, background);
                if !pixel.is_empty() {
                    pixmap.fill_rect(cell, pixel.color());
                }
            }
        }

        if ctx.grid_style == GridStyle::Lines {
            Self::draw_grid_lines(&mut pixmap, ctx, &viewport);
        }

        log::debug!("Rendered {}x{} grid to {}x{} pixmap", ctx.grid.width(), ctx.grid.height(), width, height);
        self.pixmap = Some(pixmap);
        Ok(())
    }
}
