//! Editor session: routes pointer input to the tools and commits the results.

use crate::color::Color;
use crate::config::{clamp_pixel_size, EditorConfig, PIXEL_SIZE_STEP};
use crate::document::{Document, DocumentSet};
use crate::error::{EditorError, EditorResult};
use crate::grid::{CellPos, Grid};
use crate::input::{PointerEvent, Viewport};
use crate::palette::{Palette, RecentColors};
use crate::raster::{fit_within, RasterAdapter};
use crate::tools::{BrushShape, ClickOutcome, ShapeKind, ToolKind, ToolManager, ToolSettings};
use kurbo::Point;

/// Canvas sizes offered when creating a new document.
pub const NEW_DOCUMENT_PRESETS: [(u32, u32); 5] = [(16, 16), (32, 32), (64, 64), (32, 64), (48, 48)];

/// An editing session over a set of documents.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    documents: DocumentSet,
    tools: ToolManager,
    palette: Palette,
    recent_colors: RecentColors,
    pixel_size: u32,
}

impl Editor {
    /// Create a session with the default palette.
    pub fn new(config: EditorConfig) -> EditorResult<Self> {
        Self::with_palette(config, Palette::default())
    }

    /// Create a session with a custom palette.
    pub fn with_palette(config: EditorConfig, palette: Palette) -> EditorResult<Self> {
        config.validate()?;
        Ok(Self {
            documents: DocumentSet::new(&config)?,
            tools: ToolManager::with_settings(config.tool_settings()),
            palette,
            recent_colors: RecentColors::with_capacity(config.recent_colors_capacity),
            pixel_size: config.clamped_pixel_size(),
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn active_document(&self) -> &Document {
        self.documents.active()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn recent_colors(&self) -> &RecentColors {
        &self.recent_colors
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// Select a tool. A stroke in progress is committed first.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.finish_stroke();
        self.tools.set_tool(tool);
        log::debug!("Selected {}", tool.name());
    }

    pub fn color(&self) -> Color {
        self.tools.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.tools.settings
    }

    /// Set the brush size, clamped to the brush range.
    pub fn set_brush_size(&mut self, size: u32) {
        self.tools.settings.set_brush_size(size);
    }

    pub fn set_brush_shape(&mut self, shape: BrushShape) {
        self.tools.settings.brush_shape = shape;
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.tools.settings.shape_kind = kind;
    }

    pub fn set_shape_filled(&mut self, filled: bool) {
        self.tools.settings.shape_filled = filled;
    }

    /// Check if a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tools.is_active()
    }

    /// The grid to show: the stroke's working copy while drawing, otherwise
    /// the committed grid.
    pub fn display_grid(&self) -> &Grid {
        self.tools
            .working_grid()
            .unwrap_or_else(|| self.documents.active().grid())
    }

    /// Current on-screen placement of the grid.
    pub fn viewport(&self, origin: Point) -> Viewport {
        Viewport::new(origin, self.pixel_size as f64)
    }

    // --- Pointer input ---

    /// Start a stroke at `pos`. Returns true if a stroke began.
    pub fn pointer_down(&mut self, pos: CellPos) -> bool {
        self.finish_stroke();
        let grid = self.documents.active().grid().clone();
        self.tools.begin(&grid, pos)
    }

    /// Extend the stroke in progress to `pos`.
    pub fn pointer_move(&mut self, pos: CellPos) {
        self.tools.update(pos);
    }

    /// End the stroke in progress. Returns true if it was committed.
    pub fn pointer_up(&mut self) -> bool {
        self.finish_stroke()
    }

    /// The pointer left the surface; ends the stroke like a release.
    pub fn pointer_leave(&mut self) -> bool {
        self.finish_stroke()
    }

    /// Click at `pos`: fill commits, eyedropper sets the active color.
    pub fn click(&mut self, pos: CellPos) -> ClickOutcome {
        self.finish_stroke();
        let outcome = self.tools.click(self.documents.active().grid(), pos, &self.palette);
        match &outcome {
            ClickOutcome::Edited { grid, custom_color } => {
                self.documents.active_mut().commit(grid.clone());
                if let Some(color) = custom_color {
                    self.recent_colors.push(*color);
                }
                log::debug!("Fill committed at ({}, {})", pos.x, pos.y);
            }
            ClickOutcome::Picked(color) => {
                self.tools.color = *color;
                log::debug!("Picked color {:?}", color);
            }
            ClickOutcome::None => {}
        }
        outcome
    }

    /// Route a device-space pointer event, mapping it through `viewport`.
    ///
    /// Moves outside the grid are ignored; a release outside still ends the
    /// stroke.
    pub fn handle_pointer(&mut self, event: PointerEvent, viewport: &Viewport) {
        let (width, height) = {
            let grid = self.documents.active().grid();
            (grid.width(), grid.height())
        };
        let cell = event.position().and_then(|p| viewport.cell_at(p, width, height));

        match (event, cell) {
            (PointerEvent::Down { .. }, Some(pos)) => {
                self.pointer_down(pos);
            }
            (PointerEvent::Move { .. }, Some(pos)) => self.pointer_move(pos),
            (PointerEvent::Up { .. }, _) => {
                self.pointer_up();
            }
            (PointerEvent::Leave, _) => {
                self.pointer_leave();
            }
            (PointerEvent::Click { .. }, Some(pos)) => {
                self.click(pos);
            }
            _ => {}
        }
    }

    /// Commit the stroke in progress, if any.
    fn finish_stroke(&mut self) -> bool {
        let Some(result) = self.tools.end(&self.palette) else {
            return false;
        };
        if !result.changed {
            return false;
        }
        self.documents.active_mut().commit(result.grid);
        if let Some(color) = result.custom_color {
            self.recent_colors.push(color);
        }
        true
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        self.finish_stroke();
        self.documents.active_mut().undo()
    }

    pub fn redo(&mut self) -> bool {
        self.finish_stroke();
        self.documents.active_mut().redo()
    }

    pub fn can_undo(&self) -> bool {
        self.documents.active().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.documents.active().can_redo()
    }

    /// Empty the active canvas and drop its history.
    pub fn clear(&mut self) {
        self.finish_stroke();
        self.documents.clear_active();
        log::info!("Cleared {}", self.documents.active().name);
    }

    // --- Documents ---

    pub fn new_document(&mut self, width: u32, height: u32) -> EditorResult<usize> {
        self.finish_stroke();
        self.documents.add_document(width, height)
    }

    /// Create a document from one of [`NEW_DOCUMENT_PRESETS`].
    pub fn new_document_preset(&mut self, preset: usize) -> EditorResult<usize> {
        let &(width, height) = NEW_DOCUMENT_PRESETS.get(preset).ok_or(EditorError::OutOfRange {
            index: preset,
            len: NEW_DOCUMENT_PRESETS.len(),
        })?;
        self.new_document(width, height)
    }

    pub fn delete_document(&mut self) -> bool {
        self.finish_stroke();
        self.documents.delete_active()
    }

    pub fn switch_document(&mut self, index: usize) -> EditorResult<()> {
        self.finish_stroke();
        self.documents.switch_active(index)
    }

    /// Replace the active canvas with an imported grid, dropping its history.
    pub fn import_grid(&mut self, grid: Grid) -> EditorResult<()> {
        let (width, height) = fit_within(grid.width(), grid.height(), self.config.max_import_dimension);
        if (width, height) != (grid.width(), grid.height()) {
            return Err(EditorError::InvalidDimension {
                width: grid.width(),
                height: grid.height(),
            });
        }
        self.finish_stroke();
        log::info!("Imported {}x{} grid into {}", width, height, self.documents.active().name);
        self.documents.replace_active_grid(grid);
        Ok(())
    }

    /// Decode `bytes` with `adapter` and import the result.
    pub fn import_image<A>(&mut self, adapter: &A, bytes: &[u8]) -> Result<(), A::Error>
    where
        A: RasterAdapter,
        A::Error: From<EditorError>,
    {
        let grid = adapter.import(bytes)?;
        self.import_grid(grid)?;
        Ok(())
    }

    /// Encode the active canvas with `adapter`.
    pub fn export_image<A: RasterAdapter>(&self, adapter: &A) -> Result<Vec<u8>, A::Error> {
        adapter.export(self.documents.active().grid())
    }

    // --- Zoom ---

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn set_pixel_size(&mut self, size: u32) {
        self.pixel_size = clamp_pixel_size(size);
    }

    pub fn zoom_in(&mut self) {
        self.set_pixel_size(self.pixel_size + PIXEL_SIZE_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_pixel_size(self.pixel_size.saturating_sub(PIXEL_SIZE_STEP));
    }
}
