//! Map an arbitrary image onto palette pixels.
//!
//! Every `(entry, shade, saturated)` combination the palette can render is a
//! candidate. Each source pixel picks the candidate closest to it in CIE Lab.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;
use palette::{FromColor, Lab, Srgb};

use crate::canvas::{Canvas, CANVAS_SIZE, PIXEL_COUNT};
use crate::error::{ChalkError, Result};
use crate::types::{ColorPalette, Colour};

/// Source pixels with less alpha than this become empty cells.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Highest shade a quantized pixel will use.
const MAX_RENDER_SHADE: u8 = 5;

struct Candidate {
    lab: Lab,
    pixel: u16,
}

fn to_lab(colour: Colour) -> Lab {
    Lab::from_color(Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    ))
}

fn distance(a: &Lab, b: &Lab) -> f32 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    dl * dl + da * da + db * db
}

/// Nearest-colour matcher over everything a palette can render.
pub struct Quantizer {
    candidates: Vec<Candidate>,
}

impl Quantizer {
    pub fn new(palette: &ColorPalette) -> Self {
        let mut candidates = Vec::new();

        for entry in palette.entries().filter(|e| !e.is_empty()) {
            for shade in 0..=MAX_RENDER_SHADE {
                for saturated in [false, true] {
                    let colour = Colour::from_abgr(entry.render_color(shade, saturated));
                    candidates.push(Candidate {
                        lab: to_lab(colour),
                        pixel: entry.to_encoded(shade, saturated),
                    });
                }
            }
        }

        Self { candidates }
    }

    /// Closest pixel value for a colour. Ties go to the earliest candidate.
    pub fn nearest(&self, colour: Colour) -> u16 {
        if colour.a < ALPHA_THRESHOLD {
            return 0;
        }

        let target = to_lab(colour);
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for candidate in &self.candidates {
            let d = distance(&target, &candidate.lab);
            if d < best_distance {
                best_distance = d;
                best = candidate.pixel;
            }
        }
        best
    }

    /// Quantize an image into a canvas, resizing it to 16x16 when needed.
    pub fn quantize(&self, image: &RgbaImage) -> Canvas {
        let size = CANVAS_SIZE as u32;
        let resized;
        let image = if image.dimensions() == (size, size) {
            image
        } else {
            resized = image::imageops::resize(image, size, size, FilterType::Nearest);
            &resized
        };

        let mut pixels = [0u16; PIXEL_COUNT];
        for (x, y, rgba) in image.enumerate_pixels() {
            let [r, g, b, a] = rgba.0;
            pixels[y as usize * CANVAS_SIZE + x as usize] = self.nearest(Colour::new(r, g, b, a));
        }

        Canvas::from_pixels(pixels, false)
    }
}

/// Load an image file and quantize it onto `palette`.
pub fn import_image(path: &Path, palette: &ColorPalette) -> Result<Canvas> {
    let image = image::open(path)
        .map_err(|e| ChalkError::Render {
            message: format!("Failed to read image {}: {}", path.display(), e),
            help: Some("Any format the image crate can decode is accepted".to_string()),
        })?
        .to_rgba8();

    Ok(Quantizer::new(palette).quantize(&image))
}
