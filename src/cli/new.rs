//! `chalk new` - create an empty canvas file.

use std::path::PathBuf;

use clap::Args;

use crate::canvas::Canvas;
use crate::error::{ChalkError, Result};
use crate::output::{display_path, Printer};

use super::save_canvas;

/// Create an empty canvas file
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Canvas file to create
    pub file: PathBuf,

    /// Mark the canvas as lit
    #[arg(long)]
    pub lit: bool,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: NewArgs, printer: &Printer) -> Result<()> {
    if args.file.exists() && !args.force {
        return Err(ChalkError::Io {
            path: args.file.clone(),
            message: "File already exists".to_string(),
        });
    }

    let mut canvas = Canvas::new();
    canvas.set_lit(args.lit);
    save_canvas(&args.file, &canvas)?;

    printer.status("Created", &display_path(&args.file));
    Ok(())
}
