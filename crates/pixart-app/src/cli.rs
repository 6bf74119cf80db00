//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixart", version, about = "Pixel-art raster editor", long_about = None)]
pub struct Cli {
    /// JSON file with editor settings
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Rasterize an image into a grid and save it at one pixel per cell
    Import {
        /// Image to import (PNG, JPEG or WebP)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// PNG file to write
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Import an image and render it as it appears in the editor
    Preview {
        /// Image to import (PNG, JPEG or WebP)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// PNG file to write
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// On-screen size of one cell (8..=32)
        #[arg(long, value_name = "N")]
        pixel_size: Option<u32>,

        /// Leave out the grid lines
        #[arg(long, default_value_t = false)]
        no_grid: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import() {
        let cli = Cli::try_parse_from(["pixart", "import", "in.jpg", "-o", "out.png"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(
            cli.command,
            Command::Import {
                input: "in.jpg".into(),
                output: "out.png".into(),
            }
        );
    }

    #[test]
    fn test_parse_preview() {
        let cli = Cli::try_parse_from([
            "pixart", "preview", "in.png", "--output", "out.png", "--pixel-size", "20", "--no-grid", "--config",
            "pixart.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pixart.json")));
        let Command::Preview { pixel_size, no_grid, .. } = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(pixel_size, Some(20));
        assert!(no_grid);
    }

    #[test]
    fn test_output_required() {
        assert!(Cli::try_parse_from(["pixart", "import", "in.png"]).is_err());
    }
}
