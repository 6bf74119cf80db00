//! Command execution.

use crate::cli::{Cli, Command};
use pixart_core::{Editor, EditorConfig, EditorError};
use pixart_render::{GridStyle, PngAdapter, RasterError, RenderContext, RendererError, SoftwareRenderer};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error(transparent)]
    Config(#[from] EditorError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub editor: EditorConfig,
    pub grid_style: GridStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            grid_style: GridStyle::Lines,
        }
    }
}

impl AppConfig {
    /// Load the editor settings file, if one was given.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let editor = match path {
            Some(path) => EditorConfig::load(path)?,
            None => EditorConfig::default(),
        };
        Ok(Self {
            editor,
            ..Self::default()
        })
    }
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Import { input, output } => run_import(&config, &input, &output),
        Command::Preview {
            input,
            output,
            pixel_size,
            no_grid,
        } => {
            if let Some(size) = pixel_size {
                config.editor.pixel_size = size;
            }
            if no_grid {
                config.grid_style = GridStyle::None;
            }
            run_preview(&config, &input, &output)
        }
    }
}

fn load_editor(config: &AppConfig, input: &Path) -> AppResult<(Editor, PngAdapter)> {
    let adapter = PngAdapter::with_max_dimension(config.editor.max_import_dimension);
    let mut editor = Editor::new(config.editor.clone())?;
    let bytes = std::fs::read(input)?;
    editor.import_image(&adapter, &bytes)?;
    Ok((editor, adapter))
}

/// Import `input` and write the grid to `output` at one pixel per cell.
pub fn run_import(config: &AppConfig, input: &Path, output: &Path) -> AppResult<()> {
    let (editor, adapter) = load_editor(config, input)?;
    let png = editor.export_image(&adapter)?;
    std::fs::write(output, png)?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

/// Import `input` and write a rendered preview to `output`.
pub fn run_preview(config: &AppConfig, input: &Path, output: &Path) -> AppResult<()> {
    let (editor, _) = load_editor(config, input)?;
    let ctx = RenderContext::new(editor.display_grid(), editor.pixel_size()).with_grid(config.grid_style);
    let pixmap = SoftwareRenderer::new().render(&ctx)?;
    std::fs::write(output, pixmap.to_png()?)?;
    log::info!("Wrote {}x{} preview to {}", pixmap.width(), pixmap.height(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixart_core::{CellPos, Color, Grid, RasterAdapter};
    use std::path::PathBuf;

    fn write_sample(dir: &Path, width: u32, height: u32) -> PathBuf {
        let mut grid = Grid::new(width, height).unwrap();
        grid.set(CellPos::new(1, 1), Color::rgb(255, 0, 0));
        let path = dir.join("sample.png");
        std::fs::write(&path, PngAdapter::new().export(&grid).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_import_command() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path(), 16, 16);
        let output = dir.path().join("out.png");

        run_import(&AppConfig::default(), &input, &output).unwrap();
        let grid = PngAdapter::new().import(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!((grid.width(), grid.height()), (16, 16));
        assert_eq!(grid.color_at(CellPos::new(1, 1)), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_preview_command() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path(), 8, 8);
        let output = dir.path().join("preview.png");

        let cli = Cli {
            config: None,
            command: Command::Preview {
                input,
                output: output.clone(),
                pixel_size: Some(10),
                no_grid: true,
            },
        };
        run(cli).unwrap();
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixart.json");
        std::fs::write(&path, r#"{"max_import_dimension": 8}"#).unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.editor.max_import_dimension, 8);

        let input = write_sample(dir.path(), 16, 16);
        let output = dir.path().join("out.png");
        run_import(&config, &input, &output).unwrap();
        let grid = PngAdapter::new().import(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!((grid.width(), grid.height()), (8, 8));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_import(&AppConfig::default(), &dir.path().join("nope.png"), &dir.path().join("out.png"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
