//! `chalk render` - write a canvas as a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{write_png, RenderedCanvas};

use super::{load_canvas, png_path_for};

/// Render a canvas to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Canvas file to render
    pub file: PathBuf,

    /// Output PNG (defaults to the canvas name with .png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale factor (defaults to `scale` from chalk.yaml, or 1)
    #[arg(long)]
    pub scale: Option<u32>,
}

pub fn run(args: RenderArgs, config: &Config, printer: &Printer) -> Result<()> {
    let palette = config.palette()?;
    let canvas = load_canvas(&args.file)?;

    let output = args.output.unwrap_or_else(|| png_path_for(&args.file));
    let scale = args.scale.unwrap_or_else(|| config.effective_scale()).max(1);

    let rendered = RenderedCanvas::render(&canvas, &palette);
    write_png(&rendered, &output, scale)?;

    let size = rendered.width() as u32 * scale;
    printer.status(
        "Rendered",
        &format!("{} ({}x{})", display_path(&output), size, size),
    );
    Ok(())
}
