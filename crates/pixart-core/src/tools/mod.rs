//! Tool system for the pixel editor.
//!
//! Each tool is a pure grid transformation (see [`paint`], [`fill`] and
//! [`shape`]). [`ToolManager`] wraps them in the stroke state machine: a drag
//! edits a private working copy, and only the finished stroke is handed back
//! for committing.

pub mod fill;
pub mod footprint;
pub mod line;
pub mod paint;
pub mod shape;

use crate::color::Color;
use crate::grid::{CellPos, Grid};
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Eyedropper,
    Brush,
    Negative,
    Shape,
}

impl ToolKind {
    /// Tools that act on pointer drags. The rest act on clicks.
    pub fn is_stroke_tool(self) -> bool {
        !matches!(self, ToolKind::Fill | ToolKind::Eyedropper)
    }

    /// Display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Fill => "Fill",
            ToolKind::Eyedropper => "Eyedropper",
            ToolKind::Brush => "Brush",
            ToolKind::Negative => "Negative Color",
            ToolKind::Shape => "Shape",
        }
    }
}

/// Smallest brush size.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest brush size.
pub const MAX_BRUSH_SIZE: u32 = 10;

/// Footprint shape of the brush and negative tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BrushShape {
    #[default]
    Circle,
    Square,
}

/// Stamp drawn by the shape tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
    Rectangle,
    Smile,
}

/// Parameters shared by the footprint-based tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub brush_shape: BrushShape,
    pub brush_size: u32,
    pub shape_kind: ShapeKind,
    pub shape_filled: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            brush_shape: BrushShape::Circle,
            brush_size: 3,
            shape_kind: ShapeKind::Circle,
            shape_filled: true,
        }
    }
}

impl ToolSettings {
    /// Set the brush size, clamped to `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = clamp_brush_size(size);
    }
}

/// Clamp a brush size to `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`.
pub fn clamp_brush_size(size: u32) -> u32 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}

/// In-progress drag.
#[derive(Debug, Clone)]
pub struct Stroke {
    /// Working copy the stroke paints into.
    working: Grid,
    /// Last cell the pointer was seen on.
    last: CellPos,
    /// Anchor cells the tool has already been applied at.
    drawn: HashSet<CellPos>,
    /// Cells the negative tool has already inverted.
    inverted: HashSet<CellPos>,
    /// Whether any applied cell changed the working copy.
    changed: bool,
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Waiting for a pointer press.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(Stroke),
}

/// A finished stroke, ready to commit.
#[derive(Debug, Clone)]
pub struct StrokeResult {
    /// The grid after the stroke.
    pub grid: Grid,
    /// Whether the stroke changed anything.
    pub changed: bool,
    /// Set when the stroke painted with a color outside the palette.
    pub custom_color: Option<Color>,
}

/// What a click did.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Nothing happened.
    None,
    /// The grid was edited and should be committed.
    Edited {
        grid: Grid,
        custom_color: Option<Color>,
    },
    /// The eyedropper picked a color.
    Picked(Color),
}

/// Manages the current tool, its settings and the stroke in progress.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Active drawing color.
    pub color: Color,
    /// Brush and shape parameters.
    pub settings: ToolSettings,
    /// Current stroke state.
    pub state: ToolState,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager with the given settings.
    pub fn with_settings(settings: ToolSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Set the current tool. Any stroke in progress is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = ToolState::Idle;
    }

    /// Whether the current tool paints with the active color.
    pub fn uses_color(&self) -> bool {
        match self.current_tool {
            ToolKind::Pencil | ToolKind::Brush | ToolKind::Fill => true,
            ToolKind::Shape => self.settings.shape_kind != ShapeKind::Smile,
            ToolKind::Eraser | ToolKind::Negative | ToolKind::Eyedropper => false,
        }
    }

    fn custom_color(&self, palette: &Palette) -> Option<Color> {
        (self.uses_color() && palette.is_custom(self.color)).then_some(self.color)
    }

    /// Begin a stroke on `grid` at `pos`.
    ///
    /// Returns false (and stays idle) for click tools and positions outside
    /// the grid.
    pub fn begin(&mut self, grid: &Grid, pos: CellPos) -> bool {
        if !self.current_tool.is_stroke_tool() || !grid.contains(pos) {
            return false;
        }

        let mut stroke = Stroke {
            working: grid.clone(),
            last: pos,
            drawn: HashSet::new(),
            inverted: HashSet::new(),
            changed: false,
        };
        stroke.drawn.insert(pos);
        self.apply(&mut stroke, pos);
        log::debug!("Stroke started with {:?} at ({}, {})", self.current_tool, pos.x, pos.y);

        self.state = ToolState::Dragging(stroke);
        true
    }

    /// Extend the stroke to `pos`, painting every cell on the way.
    pub fn update(&mut self, pos: CellPos) {
        let ToolState::Dragging(mut stroke) = std::mem::take(&mut self.state) else {
            return;
        };
        if stroke.working.contains(pos) {
            for cell in line::line_cells(stroke.last, pos) {
                if stroke.drawn.insert(cell) {
                    self.apply(&mut stroke, cell);
                }
            }
            stroke.last = pos;
        }
        self.state = ToolState::Dragging(stroke);
    }

    /// Finish the stroke and hand back the working grid.
    pub fn end(&mut self, palette: &Palette) -> Option<StrokeResult> {
        let ToolState::Dragging(stroke) = std::mem::take(&mut self.state) else {
            return None;
        };
        log::debug!(
            "Stroke ended with {:?}: {} anchor cells, changed: {}",
            self.current_tool,
            stroke.drawn.len(),
            stroke.changed
        );
        let custom_color = if stroke.changed { self.custom_color(palette) } else { None };
        Some(StrokeResult {
            grid: stroke.working,
            changed: stroke.changed,
            custom_color,
        })
    }

    /// Abandon the stroke in progress.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Check if a stroke is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Dragging(_))
    }

    /// The working grid of the stroke in progress.
    pub fn working_grid(&self) -> Option<&Grid> {
        match &self.state {
            ToolState::Dragging(stroke) => Some(&stroke.working),
            ToolState::Idle => None,
        }
    }

    /// Handle a click for the click tools (fill and eyedropper).
    pub fn click(&self, grid: &Grid, pos: CellPos, palette: &Palette) -> ClickOutcome {
        match self.current_tool {
            ToolKind::Fill => {
                let filled = fill::flood_fill(grid, pos, self.color);
                if filled == *grid {
                    ClickOutcome::None
                } else {
                    ClickOutcome::Edited {
                        grid: filled,
                        custom_color: self.custom_color(palette),
                    }
                }
            }
            ToolKind::Eyedropper => match paint::eyedropper(grid, pos) {
                Some(color) => ClickOutcome::Picked(color),
                None => ClickOutcome::None,
            },
            _ => ClickOutcome::None,
        }
    }

    /// Apply the current tool at one anchor cell of a stroke.
    fn apply(&self, stroke: &mut Stroke, pos: CellPos) {
        // Only the first change needs detecting.
        let before = (!stroke.changed).then(|| stroke.working.clone());
        let settings = self.settings;
        let brush_size = clamp_brush_size(settings.brush_size);
        let grid = &mut stroke.working;
        match self.current_tool {
            ToolKind::Pencil => paint::apply_pencil(grid, pos, self.color),
            ToolKind::Eraser => paint::apply_eraser(grid, pos),
            ToolKind::Brush => {
                paint::apply_brush(grid, pos, self.color, settings.brush_shape, brush_size)
            }
            ToolKind::Negative => paint::apply_negative(
                grid,
                pos,
                settings.brush_shape,
                brush_size,
                &mut stroke.inverted,
            ),
            ToolKind::Shape => shape::apply_shape(
                grid,
                pos,
                settings.shape_kind,
                brush_size,
                settings.shape_filled,
                self.color,
            ),
            ToolKind::Fill | ToolKind::Eyedropper => {}
        }
        if let Some(before) = before {
            stroke.changed = stroke.working != before;
        }
    }
}
