//! Validation checks for canvas records.
//!
//! Each check looks at one aspect of a record and returns a `ValidationResult`.

use crate::canvas::{Canvas, PIXEL_COUNT};
use crate::codec::{self, CanvasRecord, FormatVersion};
use crate::types::{pixel, ColorPalette};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Shades past this render at full value, like shade 0.
const HIGHEST_RENDERED_SHADE: u8 = 5;

/// Check the record's format version.
pub fn check_version(record: &CanvasRecord) -> ValidationResult {
    let mut result = ValidationResult::new();

    match FormatVersion::of(record) {
        Err(_) => {
            result.push(
                Diagnostic::error(
                    "chalk::check::unsupported-version",
                    format!("Unsupported format version {}", record.version.unwrap_or_default()),
                )
                .with_help("Only legacy, 1 and 2 records can be read"),
            );
        }
        Ok(FormatVersion::V2) => {}
        Ok(version) => {
            let label = match version {
                FormatVersion::Legacy => "legacy (unversioned)",
                _ => "version 1",
            };
            result.push(
                Diagnostic::warning(
                    "chalk::check::outdated-version",
                    format!("Record uses the {} format", label),
                )
                .with_help("Run `chalk migrate` to rewrite it as version 2"),
            );
        }
    }

    result
}

/// Check how the (migrated) pixel stream decodes.
pub fn check_stream(record: &CanvasRecord) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Ok(bytes) = codec::migrate_bytes(record) else {
        return result;
    };
    if record.pixels.is_none() {
        return result;
    }

    let mut scratch = [0u16; PIXEL_COUNT];
    let stats = codec::decode_pixels(&bytes, &mut scratch);

    if stats.truncated {
        result.push(
            Diagnostic::error(
                "chalk::check::truncated",
                format!("Pixel data ends inside the pixel at cell {}", stats.cells),
            )
            .with_help("The last pixel is dropped when the record is read"),
        );
    } else if stats.cells < PIXEL_COUNT {
        result.warning(
            "chalk::check::short-stream",
            format!("Pixel data covers only {} of {} cells", stats.cells, PIXEL_COUNT),
        );
    }

    // Migrated streams are padded to full size; only stored v2 data can trail.
    let stored_v2 = record.version == Some(codec::CURRENT_VERSION);
    if stored_v2 && stats.consumed < bytes.len() && !stats.truncated {
        result.warning(
            "chalk::check::trailing-data",
            format!("{} bytes after the last cell are ignored", bytes.len() - stats.consumed),
        );
    }

    result
}

/// Check decoded pixel values against the palette.
pub fn check_pixels(canvas: &Canvas, palette: &ColorPalette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (x, y, value) in canvas.iter().filter(|&(_, _, v)| v != 0) {
        let id = pixel::color_id(value);
        if palette.by_id(id).is_empty() {
            result.push(
                Diagnostic::error(
                    "chalk::check::unknown-colour",
                    format!("Unknown colour id {}", id),
                )
                .at(x, y)
                .with_help("Register the paint in chalk.yaml or repaint the cell"),
            );
        }

        if value & pixel::RESERVED_MASK != 0 {
            result.push(
                Diagnostic::warning(
                    "chalk::check::reserved-bits",
                    format!("Reserved bits set in {:#06x}", value),
                )
                .at(x, y),
            );
        }

        let shade = pixel::shade(value);
        if shade > HIGHEST_RENDERED_SHADE {
            result.push(
                Diagnostic::warning(
                    "chalk::check::shade",
                    format!("Shade {} renders unshaded", shade),
                )
                .at(x, y),
            );
        }
    }

    result
}
