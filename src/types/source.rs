//! External token tables.
//!
//! The drawing core never knows what a "dye" or a "lump of coal" is. Callers
//! hand it opaque string tokens, and these tables resolve them into either a
//! paint source (something with an intrinsic colour) or a tool kind.

use serde::{Deserialize, Serialize};

use super::Colour;

/// Something that can be painted with, e.g. a dye.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintSource {
    /// Opaque token identifying the source.
    pub token: String,
    /// Intrinsic colour. Alpha is ignored.
    pub colour: Colour,
}

impl PaintSource {
    pub fn new(token: impl Into<String>, colour: Colour) -> Self {
        Self {
            token: token.into(),
            colour,
        }
    }
}

/// Resolves paint tokens into paint sources.
pub trait PaintSourceResolver {
    fn resolve_paint_token(&self, token: &str) -> Option<PaintSource>;
}

/// Non-paint tool classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    IncreaseShade,
    DecreaseShade,
    ToggleSaturation,
}

/// Resolves tool tokens into tool kinds.
pub trait ToolResolver {
    fn resolve_tool_token(&self, token: &str) -> Option<ToolKind>;
}

/// Builtin paint sources, in id allocation order.
///
/// The first sixteen are the dyes (ids 1-16), followed by the plant paints.
const BUILTIN_PAINTS: &[(&str, u32)] = &[
    ("white_dye", 0xF9FFFE),
    ("orange_dye", 0xF9801D),
    ("magenta_dye", 0xC74EBD),
    ("light_blue_dye", 0x3AB3DA),
    ("yellow_dye", 0xFED83D),
    ("lime_dye", 0x80C71F),
    ("pink_dye", 0xF38BAA),
    ("gray_dye", 0x474F52),
    ("light_gray_dye", 0x9D9D97),
    ("cyan_dye", 0x169C9C),
    ("purple_dye", 0x8932B8),
    ("blue_dye", 0x3C44AA),
    ("brown_dye", 0x835432),
    ("green_dye", 0x5E7C16),
    ("red_dye", 0xB02E26),
    ("black_dye", 0x1D1D21),
    ("sweet_berries", 0xBB0000),
    ("glow_berries", 0xFF9737),
    ("blueberries", 0x006AC6),
    ("lavender", 0xB886DB),
];

/// Ordered table of known paint sources.
#[derive(Debug, Clone, Default)]
pub struct PaintTable {
    sources: Vec<PaintSource>,
}

impl PaintTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the table of builtin paints.
    pub fn builtin() -> Self {
        let sources = BUILTIN_PAINTS
            .iter()
            .map(|&(token, rgb)| PaintSource::new(token, Colour::from_rgb_u32(rgb)))
            .collect();
        Self { sources }
    }

    /// Add a source. A token that is already known keeps its first colour.
    pub fn push(&mut self, source: PaintSource) {
        if !self.sources.iter().any(|s| s.token == source.token) {
            self.sources.push(source);
        }
    }

    /// Iterate sources in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PaintSource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl PaintSourceResolver for PaintTable {
    fn resolve_paint_token(&self, token: &str) -> Option<PaintSource> {
        self.sources.iter().find(|s| s.token == token).cloned()
    }
}

/// Token classes for tools and off-hand draw actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolTable {
    /// Tokens that darken a pixel (the "coal" class).
    pub increase_shade: Vec<String>,
    /// Tokens that lighten a pixel.
    pub decrease_shade: Vec<String>,
    /// Tokens that flip the saturation flag.
    pub toggle_saturation: Vec<String>,
    /// Off-hand token selecting the brush action.
    pub brush: Vec<String>,
    /// Off-hand token selecting the fill action.
    pub fill: Vec<String>,
    /// Off-hand token selecting the replace action.
    pub replace: Vec<String>,
}

impl Default for ToolTable {
    fn default() -> Self {
        let list = |tokens: &[&str]| -> Vec<String> {
            tokens.iter().map(|t| t.to_string()).collect()
        };
        Self {
            increase_shade: list(&["coal", "charcoal"]),
            decrease_shade: list(&["bone_meal"]),
            toggle_saturation: list(&["glowstone_dust"]),
            brush: list(&["white_wool"]),
            fill: list(&["bucket"]),
            replace: list(&["ender_pearl"]),
        }
    }
}

impl ToolTable {
    fn contains(list: &[String], token: &str) -> bool {
        list.iter().any(|t| t == token)
    }
}

impl ToolResolver for ToolTable {
    fn resolve_tool_token(&self, token: &str) -> Option<ToolKind> {
        if Self::contains(&self.increase_shade, token) {
            Some(ToolKind::IncreaseShade)
        } else if Self::contains(&self.decrease_shade, token) {
            Some(ToolKind::DecreaseShade)
        } else if Self::contains(&self.toggle_saturation, token) {
            Some(ToolKind::ToggleSaturation)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_paint_order() {
        let table = PaintTable::builtin();
        let tokens: Vec<&str> = table.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(tokens.len(), 20);
        assert_eq!(tokens[0], "white_dye");
        assert_eq!(tokens[15], "black_dye");
        assert_eq!(tokens[19], "lavender");
    }

    #[test]
    fn test_resolve_paint_token() {
        let table = PaintTable::builtin();
        let red = table.resolve_paint_token("red_dye").unwrap();
        assert_eq!(red.colour, Colour::rgb(0xB0, 0x2E, 0x26));
        assert!(table.resolve_paint_token("coal").is_none());
    }

    #[test]
    fn test_push_keeps_first_definition() {
        let mut table = PaintTable::new();
        table.push(PaintSource::new("ink", Colour::rgb(1, 2, 3)));
        table.push(PaintSource::new("ink", Colour::rgb(9, 9, 9)));
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.resolve_paint_token("ink").unwrap().colour,
            Colour::rgb(1, 2, 3)
        );
    }

    #[test]
    fn test_resolve_tool_token() {
        let tools = ToolTable::default();
        assert_eq!(tools.resolve_tool_token("coal"), Some(ToolKind::IncreaseShade));
        assert_eq!(tools.resolve_tool_token("charcoal"), Some(ToolKind::IncreaseShade));
        assert_eq!(tools.resolve_tool_token("bone_meal"), Some(ToolKind::DecreaseShade));
        assert_eq!(
            tools.resolve_tool_token("glowstone_dust"),
            Some(ToolKind::ToggleSaturation)
        );
        assert_eq!(tools.resolve_tool_token("red_dye"), None);
    }

    #[test]
    fn test_tool_table_partial_yaml() {
        let tools: ToolTable = serde_yaml::from_str("increase_shade: [soot]").unwrap();
        assert_eq!(tools.resolve_tool_token("soot"), Some(ToolKind::IncreaseShade));
        assert_eq!(tools.resolve_tool_token("coal"), None);
        assert_eq!(tools.decrease_shade, vec!["bone_meal".to_string()]);
    }
}
