//! Core domain types for chalk.
//!
//! - `Colour` - RGBA colour values
//! - `pixel` - the packed 16-bit pixel layout
//! - `ColorPalette` - colour id registry and shade math
//! - `DrawModifier` - per-pixel transforms used by strokes
//! - `PaintTable` / `ToolTable` - external token resolution

mod colour;
mod modifier;
mod palette;
pub mod pixel;
mod source;

pub use colour::Colour;
pub use modifier::DrawModifier;
pub use palette::{
    decrease_darkness, increase_darkness, saturate, shade_factor, ColorEntry, ColorPalette,
};
pub use source::{
    PaintSource, PaintSourceResolver, PaintTable, ToolKind, ToolResolver, ToolTable,
};
