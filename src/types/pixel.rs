//! Packed pixel layout.
//!
//! A pixel is a `u16`:
//!
//! ```text
//! 15        8   7    6  4   3  0
//! [ color id ][sat][shade][reserved]
//! ```
//!
//! A colour id of `0` means the cell is empty. Empty cells are always stored
//! as plain `0`, never with stray shade or saturation bits.

/// Bits holding the palette colour id.
pub const COLOR_MASK: u16 = 0b1111_1111_0000_0000;

/// Bit holding the saturation flag.
pub const SATURATION_MASK: u16 = 0b0000_0000_1000_0000;

/// Bits holding the shade level.
pub const SHADE_MASK: u16 = 0b0000_0000_0111_0000;

/// Low bits that are never set by the palette logic.
pub const RESERVED_MASK: u16 = 0b0000_0000_0000_1111;

/// Highest value that fits in the shade field.
pub const MAX_SHADE: u8 = 7;

/// Extract the colour id.
pub const fn color_id(pixel: u16) -> u16 {
    (pixel & COLOR_MASK) >> 8
}

/// Extract the shade level.
pub const fn shade(pixel: u16) -> u8 {
    ((pixel & SHADE_MASK) >> 4) as u8
}

/// Extract the saturation flag.
pub const fn is_saturated(pixel: u16) -> bool {
    pixel & SATURATION_MASK != 0
}

/// Force a "no colour" value to plain `0`.
pub const fn normalize(pixel: u16) -> u16 {
    if pixel & COLOR_MASK == 0 {
        0
    } else {
        pixel
    }
}
