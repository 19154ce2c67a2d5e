//! The 16x16 chalkboard canvas and its drawing primitives.
//!
//! A canvas is a flat, row-major array of packed pixel values (see
//! [`crate::types::pixel`]) plus a `lit` rendering hint. It is a plain value
//! with no interior locking: callers serialize mutations themselves.
//!
//! Every operation taking coordinates fails with
//! [`ChalkError::OutOfRange`] unless both are in `0..16`.

mod action;
mod raster;

use std::fmt;

use crate::error::{ChalkError, Result};
use crate::types::{pixel, ColorEntry, ColorPalette, DrawModifier};

pub use action::DrawAction;
pub use raster::LinePoints;

/// Width and height of a canvas in cells.
pub const CANVAS_SIZE: usize = 16;

/// Number of cells in a canvas.
pub const PIXEL_COUNT: usize = CANVAS_SIZE * CANVAS_SIZE;

/// A 16x16 grid of packed pixel values.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: [u16; PIXEL_COUNT],
    lit: bool,
}

impl Canvas {
    /// Create an empty, unlit canvas.
    pub fn new() -> Self {
        Self {
            pixels: [0; PIXEL_COUNT],
            lit: false,
        }
    }

    /// Create a canvas from raw pixel values.
    pub fn from_pixels(pixels: [u16; PIXEL_COUNT], lit: bool) -> Self {
        Self { pixels, lit }
    }

    /// Raw row-major pixel values.
    pub fn pixels(&self) -> &[u16; PIXEL_COUNT] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u16; PIXEL_COUNT] {
        &mut self.pixels
    }

    /// Read one cell.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u16> {
        Ok(self.pixels[index(x, y)?])
    }

    /// Render colour (`0xAABBGGRR`) of one cell.
    pub fn get_render_color(&self, x: i32, y: i32, palette: &ColorPalette) -> Result<u32> {
        Ok(palette.render_pixel(self.get_pixel(x, y)?))
    }

    /// Write one cell, returning whether it changed.
    ///
    /// A value without a colour id is stored as plain `0`.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u16) -> Result<bool> {
        let i = index(x, y)?;
        let value = pixel::normalize(value);
        if self.pixels[i] == value {
            return Ok(false);
        }
        self.pixels[i] = value;
        Ok(true)
    }

    /// Write one cell from a palette entry.
    pub fn set_color(
        &mut self,
        x: i32,
        y: i32,
        entry: &ColorEntry,
        shade: u8,
        saturated: bool,
    ) -> Result<bool> {
        self.set_pixel(x, y, entry.to_encoded(shade, saturated))
    }

    /// Set or clear the saturation flag of one cell.
    ///
    /// Returns `false` when the flag already had that state or the cell is
    /// empty.
    pub fn set_saturated(&mut self, x: i32, y: i32, saturated: bool) -> Result<bool> {
        let current = self.get_pixel(x, y)?;
        if pixel::is_saturated(current) == saturated {
            return Ok(false);
        }

        let mut value = current & !pixel::SATURATION_MASK;
        if saturated {
            value |= pixel::SATURATION_MASK;
        }
        self.set_pixel(x, y, value)
    }

    /// Stamp `value` on the 3x3 square centred on `(x, y)`.
    ///
    /// Cells falling off the grid are skipped. The value is written as is.
    /// Always returns `true`.
    pub fn brush(&mut self, x: i32, y: i32, value: u16) -> Result<bool> {
        index(x, y)?;

        for by in y - 1..=y + 1 {
            for bx in x - 1..=x + 1 {
                if let Ok(i) = index(bx, by) {
                    self.pixels[i] = value;
                }
            }
        }
        Ok(true)
    }

    /// Replace every cell equal to the one at `(x, y)` with `value`.
    ///
    /// Always returns `true`.
    pub fn replace(&mut self, x: i32, y: i32, value: u16) -> Result<bool> {
        let target = self.get_pixel(x, y)?;
        for cell in self.pixels.iter_mut().filter(|cell| **cell == target) {
            *cell = value;
        }
        Ok(true)
    }

    /// Draw a line, applying `modifier` to each visited cell's current value.
    ///
    /// Always returns `true`.
    pub fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        modifier: &DrawModifier,
        palette: &ColorPalette,
    ) -> Result<bool> {
        index(x1, y1)?;
        index(x2, y2)?;

        for (x, y) in LinePoints::new(x1, y1, x2, y2) {
            let i = index(x, y)?;
            self.pixels[i] = modifier.apply(self.pixels[i], palette);
        }
        Ok(true)
    }

    /// Flood fill the 4-connected region around `(x, y)` with `value`.
    ///
    /// Always returns `true`, including when the seed already holds `value`.
    pub fn fill(&mut self, x: i32, y: i32, value: u16) -> Result<bool> {
        index(x, y)?;
        raster::flood_fill(&mut self.pixels, x as usize, y as usize, value);
        Ok(true)
    }

    /// Erase every cell.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Whether every cell is `0`.
    pub fn is_empty(&self) -> bool {
        self.pixels.iter().all(|&p| p == 0)
    }

    /// Copy pixels and the `lit` flag from another canvas.
    pub fn copy_from(&mut self, source: &Canvas) {
        self.pixels.copy_from_slice(&source.pixels);
        self.lit = source.lit;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }

    /// Iterate `(x, y, value)` over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u16)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .map(|(i, &p)| (i % CANVAS_SIZE, i / CANVAS_SIZE, p))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Canvas {{ lit: {} }}", self.lit)?;
        for row in self.pixels.chunks(CANVAS_SIZE) {
            for (i, p) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:04X}", p)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major index of a coordinate, or `OutOfRange`.
fn index(x: i32, y: i32) -> Result<usize> {
    let size = CANVAS_SIZE as i32;
    if (0..size).contains(&x) && (0..size).contains(&y) {
        Ok(y as usize * CANVAS_SIZE + x as usize)
    } else {
        Err(ChalkError::OutOfRange { x, y })
    }
}
