//! `chalk check` - report problems in canvas files.

use std::path::PathBuf;

use clap::Args;

use crate::codec::read_record;
use crate::discovery::{scan_paths, Config};
use crate::error::{ChalkError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_record, Diagnostic, ValidationResult};

/// Check canvas files for problems
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Canvas files or directories to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, config: &Config, printer: &Printer) -> Result<()> {
    let palette = config.palette()?;
    let files = scan_paths(&args.paths, config);

    let mut total = ValidationResult::new();
    for file in &files {
        let result = match read_record(file) {
            Ok(record) => validate_record(&record, &palette),
            Err(e) => {
                printer.error("Unreadable", &format!("{}: {}", display_path(file), e));
                total.push(Diagnostic::error("chalk::check::unreadable", e.to_string()));
                continue;
            }
        };

        if result.is_ok() {
            printer.status("Checked", &display_path(file));
        } else {
            printer.warning("Checked", &display_path(file));
            print_diagnostics(printer, file, &result);
        }
        total.merge(result);
    }

    let errors = total.error_count();
    let warnings = total.warning_count();
    let summary = format!(
        "{}: {}, {}",
        plural(files.len(), "canvas", "canvases"),
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if errors > 0 || (args.strict && warnings > 0) {
        printer.error("Failed", &summary);
        return Err(ChalkError::CheckFailed { errors, warnings });
    }

    printer.status("Finished", &summary);
    Ok(())
}
