//! Canvas renderer - resolves packed pixels to final colours.

use crate::canvas::{Canvas, CANVAS_SIZE};
use crate::types::{ColorPalette, Colour};

/// A rendered canvas - a grid of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCanvas {
    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// The canvas' `lit` hint, carried along for the consumer.
    lit: bool,
}

impl RenderedCanvas {
    /// Render every cell of `canvas` through `palette`.
    ///
    /// Empty cells come out fully transparent.
    pub fn render(canvas: &Canvas, palette: &ColorPalette) -> Self {
        let pixels = canvas
            .pixels()
            .chunks(CANVAS_SIZE)
            .map(|row| {
                row.iter()
                    .map(|&p| Colour::from_abgr(palette.render_pixel(p)))
                    .collect()
            })
            .collect();

        Self {
            pixels,
            lit: canvas.is_lit(),
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_is_transparent() {
        let palette = ColorPalette::builtin();
        let rendered = RenderedCanvas::render(&Canvas::new(), &palette);

        assert_eq!(rendered.width(), 16);
        assert_eq!(rendered.height(), 16);
        assert!(rendered
            .pixels()
            .iter()
            .flatten()
            .all(|c| c.is_transparent()));
    }

    #[test]
    fn test_render_resolves_shades() {
        let palette = ColorPalette::builtin();
        let mut canvas = Canvas::new();
        let red = palette.by_id(15);
        canvas.set_color(3, 1, red, 0, false).unwrap();
        canvas.set_color(4, 1, red, 3, false).unwrap();
        canvas.set_lit(true);

        let rendered = RenderedCanvas::render(&canvas, &palette);

        assert_eq!(rendered.get(3, 1), Some(Colour::rgb(0xB0, 0x2E, 0x26)));
        // 0xB0 * 135 / 255 = 93, 0x2E -> 24, 0x26 -> 20
        assert_eq!(rendered.get(4, 1), Some(Colour::rgb(93, 24, 20)));
        assert_eq!(rendered.get(16, 0), None);
        assert!(rendered.is_lit());
    }

    #[test]
    fn test_render_unknown_id_is_transparent() {
        let palette = ColorPalette::builtin();
        let mut canvas = Canvas::new();
        canvas.set_pixel(0, 0, 0xC800).unwrap();

        let rendered = RenderedCanvas::render(&canvas, &palette);
        assert_eq!(rendered.get(0, 0), Some(Colour::TRANSPARENT));
    }
}
