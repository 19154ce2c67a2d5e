//! `chalk draw` - apply one stroke to a canvas file.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::canvas::{Canvas, DrawAction};
use crate::discovery::Config;
use crate::error::{ChalkError, Result};
use crate::output::{display_path, Printer};
use crate::types::{ColorPalette, DrawModifier, PaintTable};

use super::{load_canvas, save_canvas};

/// Draw on a canvas file
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Canvas file to modify
    pub file: PathBuf,

    /// Paint or tool token to draw with (e.g. red_dye, coal)
    #[arg(long = "with", short = 'w')]
    pub with: Option<String>,

    /// Off-hand tool token picking the action for `click`
    #[arg(long)]
    pub tool: Option<String>,

    #[command(subcommand)]
    pub stroke: Stroke,
}

#[derive(Subcommand, Debug)]
pub enum Stroke {
    /// Modify a single cell
    Pixel { x: i32, y: i32 },
    /// Stamp a 3x3 square
    Brush { x: i32, y: i32 },
    /// Flood fill the connected region
    Fill { x: i32, y: i32 },
    /// Replace every matching cell
    Replace { x: i32, y: i32 },
    /// Use the action chosen by --tool
    Click { x: i32, y: i32 },
    /// Draw a line between two cells
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Erase every cell
    Clear,
    /// Set the lit flag
    Lit {
        #[arg(value_enum)]
        state: Switch,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

/// Turn a token into a modifier: tool tokens first, then paints.
pub fn resolve_modifier(
    token: &str,
    config: &Config,
    paints: &PaintTable,
    palette: &mut ColorPalette,
) -> Result<DrawModifier> {
    if let Some(modifier) = DrawModifier::resolve_by_tool_token(token, &config.tools) {
        return Ok(modifier);
    }

    match palette.register_from_token(token, paints)? {
        Some(entry) => Ok(DrawModifier::Paint(entry.clone())),
        None => Err(ChalkError::UnknownToken {
            token: token.to_string(),
            help: Some("Use a dye (e.g. red_dye), a paint from chalk.yaml, or a tool like coal".to_string()),
        }),
    }
}

/// Apply a stroke, returning whether the canvas reports a change.
pub fn apply_stroke(
    canvas: &mut Canvas,
    stroke: &Stroke,
    modifier: Option<&DrawModifier>,
    action: DrawAction,
    palette: &ColorPalette,
) -> Result<bool> {
    let needs_modifier = || {
        modifier.ok_or_else(|| ChalkError::Parse {
            message: "This stroke needs something to draw with".to_string(),
            help: Some("Pass --with <token>".to_string()),
        })
    };

    match *stroke {
        Stroke::Pixel { x, y } => DrawAction::Pixel.execute(canvas, x, y, needs_modifier()?, palette),
        Stroke::Brush { x, y } => DrawAction::Brush.execute(canvas, x, y, needs_modifier()?, palette),
        Stroke::Fill { x, y } => DrawAction::Fill.execute(canvas, x, y, needs_modifier()?, palette),
        Stroke::Replace { x, y } => {
            DrawAction::Replace.execute(canvas, x, y, needs_modifier()?, palette)
        }
        Stroke::Click { x, y } => action.execute(canvas, x, y, needs_modifier()?, palette),
        Stroke::Line { x1, y1, x2, y2 } => {
            canvas.line(x1, y1, x2, y2, needs_modifier()?, palette)
        }
        Stroke::Clear => {
            let changed = !canvas.is_empty();
            canvas.clear();
            Ok(changed)
        }
        Stroke::Lit { state } => {
            let lit = state == Switch::On;
            let changed = canvas.is_lit() != lit;
            canvas.set_lit(lit);
            Ok(changed)
        }
    }
}

fn describe(stroke: &Stroke, action: DrawAction) -> String {
    match *stroke {
        Stroke::Pixel { x, y } => format!("pixel ({}, {})", x, y),
        Stroke::Brush { x, y } => format!("brush ({}, {})", x, y),
        Stroke::Fill { x, y } => format!("fill ({}, {})", x, y),
        Stroke::Replace { x, y } => format!("replace ({}, {})", x, y),
        Stroke::Click { x, y } => format!("{} ({}, {})", action, x, y),
        Stroke::Line { x1, y1, x2, y2 } => format!("line ({}, {}) -> ({}, {})", x1, y1, x2, y2),
        Stroke::Clear => "clear".to_string(),
        Stroke::Lit { state } => format!("lit {}", if state == Switch::On { "on" } else { "off" }),
    }
}

pub fn run(args: DrawArgs, config: &Config, printer: &Printer) -> Result<()> {
    let paints = config.paint_table()?;
    let mut palette = ColorPalette::new();
    palette.register_all(&paints)?;

    let modifier = args
        .with
        .as_deref()
        .map(|token| resolve_modifier(token, config, &paints, &mut palette))
        .transpose()?;
    let action = DrawAction::from_tool_token(args.tool.as_deref(), &config.tools);

    let mut canvas = load_canvas(&args.file)?;
    let changed = apply_stroke(&mut canvas, &args.stroke, modifier.as_ref(), action, &palette)?;

    let what = describe(&args.stroke, action);
    let with = args.with.as_deref().map(|t| format!(" with {}", t)).unwrap_or_default();

    if changed {
        save_canvas(&args.file, &canvas)?;
        printer.status("Drawn", &format!("{}{} on {}", what, with, display_path(&args.file)));
    } else {
        printer.info("Unchanged", &format!("{}{} on {}", what, with, display_path(&args.file)));
    }

    Ok(())
}
