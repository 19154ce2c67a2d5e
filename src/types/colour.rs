//! RGBA colour value and packed-integer conversions.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChalkError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque colour from a packed `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Pack as `0xRRGGBB`, dropping alpha.
    pub const fn to_rgb_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack an `0xAABBGGRR` value.
    pub const fn from_abgr(abgr: u32) -> Self {
        Self::new(
            abgr as u8,
            (abgr >> 8) as u8,
            (abgr >> 16) as u8,
            (abgr >> 24) as u8,
        )
    }

    /// Pack as `0xAABBGGRR`.
    pub const fn to_abgr(self) -> u32 {
        (self.a as u32) << 24 | (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let invalid = || ChalkError::Parse {
            message: format!("Invalid hex colour: {}", s),
            help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
        };

        if !hex.is_ascii() {
            return Err(invalid());
        }

        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid());
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 | 8 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                let a = if hex.len() == 8 { byte(6)? } else { 255 };
                Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
            }
            _ => Err(invalid()),
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Colour {
    type Err = ChalkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
