//! Validation for canvas records.
//!
//! Runs a suite of checks against a stored record and reports errors and
//! warnings. Used by `chalk check`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use std::path::Path;

use crate::codec::{self, CanvasRecord};
use crate::output::{display_path, Printer};
use crate::types::ColorPalette;

/// Run all checks against a record.
pub fn validate_record(record: &CanvasRecord, palette: &ColorPalette) -> ValidationResult {
    let mut result = checks::check_version(record);
    if result.has_errors() {
        return result;
    }

    result.merge(checks::check_stream(record));

    if let Ok(canvas) = codec::decode(record) {
        result.merge(checks::check_pixels(&canvas, palette));
    }

    result
}

/// Print one file's diagnostics to stderr.
pub fn print_diagnostics(printer: &Printer, path: &Path, result: &ValidationResult) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        let location = match d.cell {
            Some((x, y)) => format!("{}@{},{}", display_path(path), x, y),
            None => display_path(path),
        };
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        eprintln!("    {} {}", printer.dim("-->"), location);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}
