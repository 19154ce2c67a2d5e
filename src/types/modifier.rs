//! Draw modifiers: how a stroke changes the pixels it touches.

use super::palette::{decrease_darkness, increase_darkness, ColorEntry, ColorPalette};
use super::pixel;
use super::source::{ToolKind, ToolResolver};

/// A per-pixel transform applied by drawing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawModifier {
    /// Paint with a colour, resetting shade and saturation.
    Paint(ColorEntry),
    /// Darken by one shade step.
    IncreaseShade,
    /// Lighten by one shade step.
    DecreaseShade,
    /// Flip the saturation flag.
    ToggleSaturation,
}

impl DrawModifier {
    /// Non-paint modifiers, in token resolution order.
    pub const TOOLS: [DrawModifier; 3] = [
        DrawModifier::IncreaseShade,
        DrawModifier::DecreaseShade,
        DrawModifier::ToggleSaturation,
    ];

    /// Find the tool modifier matching `token`. The first match in
    /// [`DrawModifier::TOOLS`] wins.
    pub fn resolve_by_tool_token(token: &str, tools: &impl ToolResolver) -> Option<DrawModifier> {
        Self::TOOLS
            .into_iter()
            .find(|modifier| modifier.matches_token(token, tools))
    }

    /// The tool kind this modifier answers to, `None` for paint.
    pub fn tool_kind(&self) -> Option<ToolKind> {
        match self {
            DrawModifier::Paint(_) => None,
            DrawModifier::IncreaseShade => Some(ToolKind::IncreaseShade),
            DrawModifier::DecreaseShade => Some(ToolKind::DecreaseShade),
            DrawModifier::ToggleSaturation => Some(ToolKind::ToggleSaturation),
        }
    }

    /// Whether this modifier is selected by `token`.
    pub fn matches_token(&self, token: &str, tools: &impl ToolResolver) -> bool {
        match self {
            DrawModifier::Paint(entry) => entry.token() == Some(token),
            _ => tools.resolve_tool_token(token) == self.tool_kind(),
        }
    }

    /// Transform one pixel value.
    pub fn apply(&self, raw: u16, palette: &ColorPalette) -> u16 {
        match self {
            DrawModifier::Paint(entry) => entry.to_encoded(0, false),
            DrawModifier::IncreaseShade => reshade(raw, palette, increase_darkness),
            DrawModifier::DecreaseShade => reshade(raw, palette, decrease_darkness),
            DrawModifier::ToggleSaturation => palette
                .from_raw(raw)
                .to_encoded(pixel::shade(raw), !pixel::is_saturated(raw)),
        }
    }
}

fn reshade(raw: u16, palette: &ColorPalette, step: fn(u8) -> u8) -> u16 {
    let entry = palette.from_raw(raw);
    if entry.is_empty() {
        return 0;
    }
    entry.to_encoded(step(pixel::shade(raw)), pixel::is_saturated(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolTable;

    fn yellow(palette: &ColorPalette) -> ColorEntry {
        palette.by_id(5).clone()
    }

    #[test]
    fn test_paint_resets_shade_and_saturation() {
        let palette = ColorPalette::builtin();
        let paint = DrawModifier::Paint(yellow(&palette));

        assert_eq!(paint.apply(0, &palette), 0x0500);
        assert_eq!(paint.apply(0x0FB0, &palette), 0x0500);
    }

    #[test]
    fn test_paint_with_empty_erases() {
        let palette = ColorPalette::builtin();
        let eraser = DrawModifier::Paint(ColorEntry::EMPTY);
        assert_eq!(eraser.apply(0x0FB0, &palette), 0);
    }

    #[test]
    fn test_increase_shade() {
        let palette = ColorPalette::builtin();
        let m = DrawModifier::IncreaseShade;

        assert_eq!(m.apply(0x0500, &palette), 0x0510);
        assert_eq!(m.apply(0x0530, &palette), 0x0530);
        assert_eq!(m.apply(0x05C0, &palette), 0x0580); // saturated shade 4 -> 0
    }

    #[test]
    fn test_decrease_shade() {
        let palette = ColorPalette::builtin();
        let m = DrawModifier::DecreaseShade;

        assert_eq!(m.apply(0x0500, &palette), 0x0540);
        assert_eq!(m.apply(0x0540, &palette), 0x0550);
        assert_eq!(m.apply(0x0550, &palette), 0x0550);
    }

    #[test]
    fn test_shade_on_empty_or_unknown_is_zero() {
        let palette = ColorPalette::builtin();
        assert_eq!(DrawModifier::IncreaseShade.apply(0, &palette), 0);
        assert_eq!(DrawModifier::DecreaseShade.apply(0x0070, &palette), 0);
        // id 200 is not registered
        assert_eq!(DrawModifier::IncreaseShade.apply(0xC810, &palette), 0);
    }

    #[test]
    fn test_toggle_saturation() {
        let palette = ColorPalette::builtin();
        let m = DrawModifier::ToggleSaturation;

        assert_eq!(m.apply(0x0520, &palette), 0x05A0);
        assert_eq!(m.apply(0x05A0, &palette), 0x0520);
        assert_eq!(m.apply(0, &palette), 0);
    }

    #[test]
    fn test_resolve_by_tool_token() {
        let tools = ToolTable::default();

        assert_eq!(
            DrawModifier::resolve_by_tool_token("charcoal", &tools),
            Some(DrawModifier::IncreaseShade)
        );
        assert_eq!(
            DrawModifier::resolve_by_tool_token("bone_meal", &tools),
            Some(DrawModifier::DecreaseShade)
        );
        assert_eq!(
            DrawModifier::resolve_by_tool_token("glowstone_dust", &tools),
            Some(DrawModifier::ToggleSaturation)
        );
        assert_eq!(DrawModifier::resolve_by_tool_token("red_dye", &tools), None);
    }

    #[test]
    fn test_first_tool_match_wins() {
        let tools = ToolTable {
            increase_shade: vec!["ash".into()],
            decrease_shade: vec!["ash".into()],
            ..ToolTable::default()
        };
        assert_eq!(
            DrawModifier::resolve_by_tool_token("ash", &tools),
            Some(DrawModifier::IncreaseShade)
        );
    }

    #[test]
    fn test_paint_matches_its_token() {
        let palette = ColorPalette::builtin();
        let tools = ToolTable::default();
        let paint = DrawModifier::Paint(yellow(&palette));

        assert!(paint.matches_token("yellow_dye", &tools));
        assert!(!paint.matches_token("red_dye", &tools));
        assert!(!paint.matches_token("coal", &tools));
    }
}
