pub mod check;
pub mod completions;
pub mod draw;
pub mod import;
pub mod migrate;
pub mod new;
pub mod palette;
pub mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::canvas::Canvas;
use crate::codec::{self, read_record, write_record};
use crate::error::Result;

/// chalk - 16x16 pixel canvases with shading and versioned storage
#[derive(Parser, Debug)]
#[command(name = "chalk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./chalk.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty canvas file
    New(new::NewArgs),

    /// Draw on a canvas file
    Draw(draw::DrawArgs),

    /// Render a canvas to PNG
    Render(render::RenderArgs),

    /// Quantize an image into a canvas file
    Import(import::ImportArgs),

    /// Check canvas files for problems
    Check(check::CheckArgs),

    /// Rewrite older canvas files in the current format
    Migrate(migrate::MigrateArgs),

    /// List registered colours
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read and decode a canvas file, migrating it in memory if needed.
pub fn load_canvas(path: &Path) -> Result<Canvas> {
    codec::decode(&read_record(path)?)
}

/// Encode and write a canvas file.
pub fn save_canvas(path: &Path, canvas: &Canvas) -> Result<()> {
    write_record(path, &codec::encode(canvas))
}

/// Default PNG path for a canvas file: `logo.canvas.json` -> `logo.png`.
pub fn png_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("canvas");
    let stem = name
        .strip_suffix(codec::CANVAS_EXTENSION)
        .or_else(|| name.strip_suffix(".json"))
        .unwrap_or(name);
    path.with_file_name(format!("{}.png", stem))
}
