//! `chalk palette` - list registered colours and their shade ramps.

use clap::Args;

use crate::discovery::Config;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{ColorEntry, ColorPalette, Colour};

/// Shades listed for each colour, lightest to darkest.
const RAMP: [u8; 6] = [5, 4, 0, 1, 2, 3];

/// List registered colours
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Also show the saturated ramp
    #[arg(long)]
    pub saturated: bool,
}

/// One listing line: id, token, base colour, then the shade ramp.
pub fn format_entry(entry: &ColorEntry, saturated: bool, printer: &Printer) -> String {
    let ramp: String = RAMP
        .iter()
        .map(|&shade| printer.swatch(Colour::from_abgr(entry.render_color(shade, saturated))))
        .collect();

    format!(
        "{:>3}  {:<16} {}  {}",
        entry.id(),
        entry.token().unwrap_or("-"),
        Colour::from_rgb_u32(entry.base_rgb()),
        ramp
    )
}

pub fn run(args: PaletteArgs, config: &Config, printer: &Printer) -> Result<()> {
    let palette: ColorPalette = config.palette()?;

    printer.status("Listing", &plural(palette.len(), "colour", "colours"));
    for entry in palette.entries() {
        println!("{}", format_entry(entry, false, printer));
        if args.saturated {
            println!("{}", format_entry(entry, true, printer));
        }
    }

    Ok(())
}
