//! Rendering module for chalk.
//!
//! This module turns canvases into images and images back into canvases.

mod canvas;
mod png;
mod quantize;

pub use canvas::RenderedCanvas;
pub use png::{to_image, write_png};
pub use quantize::{import_image, Quantizer, ALPHA_THRESHOLD};
