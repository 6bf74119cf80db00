//! Pixart App Library
//!
//! Command-line shell over the editing engine: image import, PNG export and
//! rendered previews.

mod app;
mod cli;

pub use app::{run, run_import, run_preview, AppConfig, AppError, AppResult};
pub use cli::{Cli, Command};
