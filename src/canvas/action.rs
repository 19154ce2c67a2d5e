//! Draw actions selected by the off-hand tool.

use std::fmt;

use crate::error::Result;
use crate::types::{ColorPalette, DrawModifier, ToolTable};

use super::Canvas;

/// How a single click on the canvas is turned into a drawing operation.
///
/// Every action first runs the modifier over the clicked cell's current
/// value, then hands the result to the matching canvas primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawAction {
    Pixel,
    Brush,
    Fill,
    Replace,
}

impl DrawAction {
    pub const ALL: [DrawAction; 4] = [
        DrawAction::Pixel,
        DrawAction::Brush,
        DrawAction::Fill,
        DrawAction::Replace,
    ];

    /// Pick the action for an off-hand token. No token (or an unknown one)
    /// draws single pixels.
    pub fn from_tool_token(token: Option<&str>, tools: &ToolTable) -> Self {
        let Some(token) = token else {
            return DrawAction::Pixel;
        };
        let has = |list: &[String]| list.iter().any(|t| t == token);

        if has(&tools.brush) {
            DrawAction::Brush
        } else if has(&tools.fill) {
            DrawAction::Fill
        } else if has(&tools.replace) {
            DrawAction::Replace
        } else {
            DrawAction::Pixel
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DrawAction::Pixel => "pixel",
            DrawAction::Brush => "brush",
            DrawAction::Fill => "fill",
            DrawAction::Replace => "replace",
        }
    }

    /// Run the action at `(x, y)`, returning whether the canvas reports a change.
    pub fn execute(
        self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        modifier: &DrawModifier,
        palette: &ColorPalette,
    ) -> Result<bool> {
        let value = modifier.apply(canvas.get_pixel(x, y)?, palette);
        match self {
            DrawAction::Pixel => canvas.set_pixel(x, y, value),
            DrawAction::Brush => canvas.brush(x, y, value),
            DrawAction::Fill => canvas.fill(x, y, value),
            DrawAction::Replace => canvas.replace(x, y, value),
        }
    }
}

impl fmt::Display for DrawAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
