//! Colour palette registry and shade/saturation math.
//!
//! Every pixel stores an 8-bit colour id. The palette maps those ids to base
//! colours, and turns `(entry, shade, saturated)` into a final render colour.
//! Ids are handed out once and never reused, so a saved canvas keeps its
//! meaning as long as paints register in the same order.

use std::collections::{BTreeMap, HashMap};

use crate::error::{ChalkError, Result};

use super::pixel::{self, MAX_SHADE, SATURATION_MASK};
use super::source::{PaintSource, PaintSourceResolver, PaintTable};

/// A registered palette colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    id: u8,
    base_rgb: u32,
    token: Option<String>,
}

/// The reserved "no colour" entry.
static EMPTY: ColorEntry = ColorEntry::EMPTY;

impl ColorEntry {
    /// The reserved "no colour" entry, id `0`.
    pub const EMPTY: ColorEntry = ColorEntry {
        id: 0,
        base_rgb: 0,
        token: None,
    };

    fn new(id: u8, base_rgb: u32, token: impl Into<String>) -> Self {
        Self {
            id,
            base_rgb: base_rgb & 0x00FF_FFFF,
            token: Some(token.into()),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Base colour as `0xRRGGBB`.
    pub fn base_rgb(&self) -> u32 {
        self.base_rgb
    }

    /// The paint token this entry was registered from.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.id == 0
    }

    /// Pack this entry with a shade and saturation flag into a pixel value.
    ///
    /// Always `0` for the empty entry, whatever flags are passed.
    pub fn to_encoded(&self, shade: u8, saturated: bool) -> u16 {
        if self.is_empty() {
            return 0;
        }

        let mut raw = (self.id as u16) << 8;
        raw |= (shade.min(MAX_SHADE) as u16) << 4;
        if saturated {
            raw |= SATURATION_MASK;
        }
        raw
    }

    /// Final colour for this entry as `0xAABBGGRR`.
    ///
    /// The empty entry returns its base value untouched (fully transparent).
    pub fn render_color(&self, shade: u8, saturated: bool) -> u32 {
        if self.is_empty() {
            return self.base_rgb;
        }

        let factor = shade_factor(shade);
        let source = if saturated {
            saturate(self.base_rgb)
        } else {
            self.base_rgb
        };

        let scale = |channel: u32| (channel * factor / 255).min(255);
        let red = scale(source >> 16 & 0xFF);
        let green = scale(source >> 8 & 0xFF);
        let blue = scale(source & 0xFF);

        0xFF00_0000 | blue << 16 | green << 8 | red
    }
}

/// Brightness factor (out of 255) for a shade level.
///
/// Shades 1-3 darken, 4-5 lighten. Anything else renders at full value.
pub fn shade_factor(shade: u8) -> u32 {
    match shade {
        1 => 220,
        2 => 180,
        3 => 135,
        4 => 285,
        5 => 320,
        _ => 255,
    }
}

/// Push a `0xRRGGBB` colour away from its grey level.
pub fn saturate(rgb: u32) -> u32 {
    const AMOUNT: f32 = 1.0;

    let red = (rgb >> 16 & 0xFF) as f32;
    let green = (rgb >> 8 & 0xFF) as f32;
    let blue = (rgb & 0xFF) as f32;

    let grey = 0.2989 * red + 0.5870 * green + 0.1140 * blue;
    let push = |channel: f32| (-grey * AMOUNT + channel * (1.0 + AMOUNT)) as i32;

    let red = push(red).clamp(0, 255) as u32;
    let green = push(green).clamp(0, 255) as u32;
    let blue = push(blue).clamp(0, 255) as u32;

    red << 16 | green << 8 | blue
}

/// Next darker shade.
///
/// `0 -> 1 -> 2 -> 3` darkens, `5 -> 4 -> 0` walks back from the light end.
/// Shade 3 is the ceiling and stays put.
pub fn increase_darkness(shade: u8) -> u8 {
    match shade {
        0..=2 => shade + 1,
        4 => 0,
        5 => 4,
        _ => shade,
    }
}

/// Next lighter shade.
///
/// `3 -> 2 -> 1 -> 0` walks back from the dark end, `0 -> 4 -> 5` lightens.
/// Shade 5 is the ceiling and stays put.
pub fn decrease_darkness(shade: u8) -> u8 {
    match shade {
        1..=3 => shade - 1,
        0 => 4,
        4 => 5,
        _ => shade,
    }
}

/// Registry of colour entries, keyed by id and by paint token.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    entries: BTreeMap<u8, ColorEntry>,
    by_token: HashMap<String, u8>,
    next_id: u16,
}

impl ColorPalette {
    /// Create a palette containing only the empty entry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            by_token: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a palette with every builtin paint registered.
    pub fn builtin() -> Self {
        let mut palette = Self::new();
        // 20 builtins cannot overflow 255 ids.
        let _ = palette.register_all(&PaintTable::builtin());
        palette
    }

    /// Register every source of a table, in order.
    pub fn register_all(&mut self, table: &PaintTable) -> Result<()> {
        for source in table.iter() {
            self.register(source)?;
        }
        Ok(())
    }

    /// Look up an entry by id. Unknown ids resolve to the empty entry.
    pub fn by_id(&self, id: u16) -> &ColorEntry {
        u8::try_from(id)
            .ok()
            .and_then(|id| self.entries.get(&id))
            .unwrap_or(&EMPTY)
    }

    /// Look up the entry stored in a pixel value.
    pub fn from_raw(&self, pixel: u16) -> &ColorEntry {
        self.by_id(pixel::color_id(pixel))
    }

    /// Look up an already registered paint token.
    pub fn by_token(&self, token: &str) -> Option<&ColorEntry> {
        self.by_token.get(token).map(|&id| self.by_id(id as u16))
    }

    /// Register a paint source, or return its existing entry.
    pub fn register(&mut self, source: &PaintSource) -> Result<&ColorEntry> {
        if let Some(&id) = self.by_token.get(&source.token) {
            return Ok(self.by_id(id as u16));
        }

        let id = u8::try_from(self.next_id).map_err(|_| ChalkError::PaletteFull {
            token: source.token.clone(),
        })?;
        self.next_id += 1;

        let entry = ColorEntry::new(id, source.colour.to_rgb_u32(), source.token.clone());
        self.by_token.insert(source.token.clone(), id);
        let entry: &ColorEntry = self.entries.entry(id).or_insert(entry);
        Ok(entry)
    }

    /// Register the paint source behind `token`.
    ///
    /// Returns `Ok(None)` when the resolver does not know the token.
    pub fn register_from_token(
        &mut self,
        token: &str,
        resolver: &impl PaintSourceResolver,
    ) -> Result<Option<&ColorEntry>> {
        if self.by_token.contains_key(token) {
            return Ok(self.by_token(token));
        }

        match resolver.resolve_paint_token(token) {
            Some(source) => self.register(&source).map(Some),
            None => Ok(None),
        }
    }

    /// Render colour (`0xAABBGGRR`) of a raw pixel value.
    pub fn render_pixel(&self, pixel: u16) -> u32 {
        self.from_raw(pixel)
            .render_color(pixel::shade(pixel), pixel::is_saturated(pixel))
    }

    /// Iterate registered entries by ascending id. The empty entry is not included.
    pub fn entries(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.values()
    }

    /// Number of registered entries, not counting the empty entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_builtin_ids() {
        let palette = ColorPalette::builtin();
        assert_eq!(palette.len(), 20);
        assert_eq!(palette.by_token("white_dye").unwrap().id(), 1);
        assert_eq!(palette.by_token("black_dye").unwrap().id(), 16);
        assert_eq!(palette.by_token("lavender").unwrap().id(), 20);
        assert_eq!(palette.by_id(17).token(), Some("sweet_berries"));
    }

    #[test]
    fn test_unknown_id_is_empty() {
        let palette = ColorPalette::builtin();
        assert!(palette.by_id(0).is_empty());
        assert!(palette.by_id(200).is_empty());
        assert!(palette.by_id(0x1234).is_empty());
        assert_eq!(palette.from_raw(0xC800), &ColorEntry::EMPTY);
    }

    #[test]
    fn test_from_raw_reads_high_byte() {
        let palette = ColorPalette::builtin();
        assert_eq!(palette.from_raw(0x05D0).id(), 5);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut palette = ColorPalette::builtin();
        let ink = PaintSource::new("ink", Colour::rgb(10, 20, 30));

        let first = palette.register(&ink).unwrap().id();
        let again = palette.register(&ink).unwrap().id();

        assert_eq!(first, 21);
        assert_eq!(again, 21);
        assert_eq!(palette.len(), 21);
    }

    #[test]
    fn test_register_from_token() {
        let mut table = PaintTable::new();
        table.push(PaintSource::new("soot", Colour::rgb(5, 5, 5)));
        table.push(PaintSource::new("rust", Colour::rgb(0x8B, 0x40, 0x10)));

        let mut palette = ColorPalette::new();
        let rust = palette.register_from_token("rust", &table).unwrap().unwrap();
        assert_eq!(rust.id(), 1);
        assert_eq!(rust.base_rgb(), 0x8B4010);

        let soot = palette.register_from_token("soot", &table).unwrap().unwrap();
        assert_eq!(soot.id(), 2);

        // Still the same id after the fact.
        assert_eq!(palette.register_from_token("rust", &table).unwrap().unwrap().id(), 1);
        assert!(palette.register_from_token("chalk", &table).unwrap().is_none());
    }

    #[test]
    fn test_palette_full() {
        let mut palette = ColorPalette::new();
        for i in 0..255 {
            palette
                .register(&PaintSource::new(format!("paint-{i}"), Colour::rgb(i as u8, 0, 0)))
                .unwrap();
        }
        assert_eq!(palette.by_token("paint-254").unwrap().id(), 255);

        let result = palette.register(&PaintSource::new("one-too-many", Colour::rgb(0, 0, 0)));
        assert!(matches!(result, Err(ChalkError::PaletteFull { .. })));
    }

    #[test]
    fn test_to_encoded() {
        let palette = ColorPalette::builtin();
        let yellow = palette.by_id(5);

        assert_eq!(yellow.to_encoded(0, false), 0x0500);
        assert_eq!(yellow.to_encoded(3, true), 0x05B0);
        assert_eq!(yellow.to_encoded(42, false), 0x0570);
        assert_eq!(ColorEntry::EMPTY.to_encoded(5, true), 0);
    }

    #[test]
    fn test_render_color_plain() {
        let palette = ColorPalette::builtin();
        // red dye, 0xB02E26
        let red = palette.by_id(15);
        assert_eq!(red.render_color(0, false), 0xFF262EB0);
    }

    #[test]
    fn test_render_color_shades() {
        let mut palette = ColorPalette::new();
        let grey = palette
            .register(&PaintSource::new("grey", Colour::rgb(100, 100, 100)))
            .unwrap()
            .clone();

        // 100 * 135 / 255 = 52
        assert_eq!(grey.render_color(3, false), 0xFF343434);
        // 100 * 320 / 255 = 125
        assert_eq!(grey.render_color(5, false), 0xFF7D7D7D);
        // unused shades render like shade 0
        assert_eq!(grey.render_color(7, false), grey.render_color(0, false));
    }

    #[test]
    fn test_render_color_clamps_bright_shades() {
        let mut palette = ColorPalette::new();
        let white = palette
            .register(&PaintSource::new("white", Colour::rgb(250, 250, 250)))
            .unwrap()
            .clone();
        assert_eq!(white.render_color(5, false), 0xFFFFFFFF);
    }

    #[test]
    fn test_render_color_empty_is_untouched() {
        assert_eq!(ColorEntry::EMPTY.render_color(3, true), 0);
    }

    #[test]
    fn test_saturate_grey_is_stable() {
        // grey = 127.99, so each channel lands back on 128
        assert_eq!(saturate(0x808080), 0x808080);
    }

    #[test]
    fn test_saturate_pushes_channels_apart() {
        // grey = 0.2989*200 + 0.5870*100 + 0.1140*50 = 124.18
        // r = 400 - 124.18 = 275 -> 255, g = 200 - 124.18 = 75, b = 100 - 124.18 < 0 -> 0
        assert_eq!(saturate(0xC86432), 0xFF4B00);
    }

    #[test]
    fn test_render_saturated_uses_saturated_base() {
        let mut palette = ColorPalette::new();
        let entry = palette
            .register(&PaintSource::new("clay", Colour::from_rgb_u32(0xC86432)))
            .unwrap()
            .clone();
        assert_eq!(entry.render_color(0, true), 0xFF004BFF);
    }

    #[test]
    fn test_increase_darkness_table() {
        let expected = [(0, 1), (1, 2), (2, 3), (3, 3), (4, 0), (5, 4), (6, 6), (7, 7)];
        for (from, to) in expected {
            assert_eq!(increase_darkness(from), to, "shade {from}");
        }
    }

    #[test]
    fn test_decrease_darkness_table() {
        let expected = [(0, 4), (1, 0), (2, 1), (3, 2), (4, 5), (5, 5), (6, 6), (7, 7)];
        for (from, to) in expected {
            assert_eq!(decrease_darkness(from), to, "shade {from}");
        }
    }

    #[test]
    fn test_render_pixel() {
        let palette = ColorPalette::builtin();
        let red = palette.by_id(15);
        let pixel = red.to_encoded(2, false);
        assert_eq!(palette.render_pixel(pixel), red.render_color(2, false));
        assert_eq!(palette.render_pixel(0), 0);
    }
}
