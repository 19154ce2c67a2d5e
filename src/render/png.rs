//! PNG output for rendered canvases.
//!
//! Converts rendered canvases to PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{ChalkError, Result};

use super::RenderedCanvas;

/// Build the image for a rendered canvas, each cell `scale` pixels wide.
pub fn to_image(rendered: &RenderedCanvas, scale: u32) -> RgbaImage {
    let scale = scale.max(1);

    let width = rendered.width() as u32 * scale;
    let height = rendered.height() as u32 * scale;

    ImageBuffer::from_fn(width, height, |px, py| {
        let colour = rendered
            .get((px / scale) as usize, (py / scale) as usize)
            .unwrap_or_default();
        Rgba(colour.to_rgba())
    })
}

/// Write a rendered canvas to a PNG file.
///
/// # Arguments
///
/// * `rendered` - The rendered canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (0 and 1 both mean no scaling)
pub fn write_png(rendered: &RenderedCanvas, path: &Path, scale: u32) -> Result<()> {
    to_image(rendered, scale)
        .save(path)
        .map_err(|e| ChalkError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
