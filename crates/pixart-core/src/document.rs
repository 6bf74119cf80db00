//! Documents (canvases) and the set of open documents.

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::grid::Grid;
use crate::history::History;
use uuid::Uuid;

/// A named canvas with its own undo history.
///
/// The current grid is always the history's current entry.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    history: History,
}

impl Document {
    /// Create a document with an empty `width` x `height` grid.
    pub fn new(name: impl Into<String>, width: u32, height: u32, history_capacity: usize) -> EditorResult<Self> {
        let grid = Grid::new(width, height)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            history: History::with_capacity(grid, history_capacity),
        })
    }

    /// The committed grid.
    pub fn grid(&self) -> &Grid {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Commit a new grid as one undo step.
    pub fn commit(&mut self, grid: Grid) {
        self.history.commit(grid);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the grid with an empty one of the same size, dropping history.
    pub fn clear(&mut self) {
        let grid = self.grid();
        // Dimensions were validated when the grid was built.
        if let Ok(empty) = Grid::new(grid.width(), grid.height()) {
            self.history.reset(empty);
        }
    }

    /// Replace the grid with `grid`, dropping history.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.history.reset(grid);
    }
}

/// Ordered set of open documents with one active document.
///
/// The set is never empty.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    documents: Vec<Document>,
    active: usize,
    history_capacity: usize,
}

impl DocumentSet {
    /// Create a set holding `"Canvas 1"` at the configured size.
    pub fn new(config: &EditorConfig) -> EditorResult<Self> {
        let first = Document::new("Canvas 1", config.canvas_width, config.canvas_height, config.history_capacity)?;
        Ok(Self {
            documents: vec![first],
            active: 0,
            history_capacity: config.history_capacity,
        })
    }

    /// Append a new empty document and make it active.
    ///
    /// Returns the index of the new document.
    pub fn add_document(&mut self, width: u32, height: u32) -> EditorResult<usize> {
        let name = format!("Canvas {}", self.documents.len() + 1);
        let document = Document::new(name, width, height, self.history_capacity)?;
        log::info!("Created {} ({}x{})", document.name, width, height);
        self.documents.push(document);
        self.active = self.documents.len() - 1;
        Ok(self.active)
    }

    /// Delete the active document and select the one before it.
    ///
    /// Refused when only one document is left.
    pub fn delete_active(&mut self) -> bool {
        if self.documents.len() <= 1 {
            log::warn!("Refusing to delete the last document");
            return false;
        }
        let removed = self.documents.remove(self.active);
        self.active = self.active.saturating_sub(1);
        log::info!("Deleted {}", removed.name);
        true
    }

    /// Make the document at `index` active.
    pub fn switch_active(&mut self, index: usize) -> EditorResult<()> {
        if index >= self.documents.len() {
            return Err(EditorError::OutOfRange {
                index,
                len: self.documents.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn active(&self) -> &Document {
        &self.documents[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Document {
        &mut self.documents[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Apply `f` to the active document only.
    pub fn update_active<R>(&mut self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(self.active_mut())
    }

    /// Reset the active document to an empty grid of the same size.
    pub fn clear_active(&mut self) {
        self.active_mut().clear();
    }

    /// Reset the active document to `grid`.
    pub fn replace_active_grid(&mut self, grid: Grid) {
        self.active_mut().replace_grid(grid);
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}
