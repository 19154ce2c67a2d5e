//! chalk - 16x16 pixel canvases with palette shading and versioned storage
//!
//! A library for drawing on small packed-pixel canvases, rendering them
//! through a colour palette, and persisting them in a compact binary format
//! that older records migrate into.

pub mod canvas;
pub mod cli;
pub mod codec;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use canvas::{Canvas, DrawAction, LinePoints, CANVAS_SIZE, PIXEL_COUNT};
pub use codec::{decode, encode, needs_migration, CanvasRecord, FormatVersion, CURRENT_VERSION};
pub use discovery::{discover, Config, Project};
pub use error::{ChalkError, Result};
pub use render::{import_image, write_png, Quantizer, RenderedCanvas};
pub use types::{
    ColorEntry, ColorPalette, Colour, DrawModifier, PaintSource, PaintSourceResolver, PaintTable,
    ToolKind, ToolResolver, ToolTable,
};
pub use validation::{validate_record, Diagnostic, Severity, ValidationResult};
