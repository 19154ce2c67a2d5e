//! `chalk import` - quantize an image into a canvas file.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Config;
use crate::error::{ChalkError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::import_image;

use super::save_canvas;

/// Quantize an image into a canvas file
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Source image (resized to 16x16 if needed)
    pub image: PathBuf,

    /// Canvas file to write
    pub file: PathBuf,

    /// Mark the canvas as lit
    #[arg(long)]
    pub lit: bool,

    /// Overwrite an existing canvas file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: ImportArgs, config: &Config, printer: &Printer) -> Result<()> {
    if args.file.exists() && !args.force {
        return Err(ChalkError::Io {
            path: args.file.clone(),
            message: "File already exists (use --force to overwrite)".to_string(),
        });
    }

    let palette = config.palette()?;
    let mut canvas = import_image(&args.image, &palette)?;
    canvas.set_lit(args.lit);
    save_canvas(&args.file, &canvas)?;

    let painted = canvas.iter().filter(|&(_, _, p)| p != 0).count();
    printer.status(
        "Imported",
        &format!(
            "{} -> {} ({})",
            display_path(&args.image),
            display_path(&args.file),
            plural(painted, "cell", "cells")
        ),
    );
    Ok(())
}
