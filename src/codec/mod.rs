//! Versioned canvas records.
//!
//! A [`CanvasRecord`] is the persisted form of a canvas:
//!
//! ```text
//! pixels?:  bytes   present only when the canvas is not empty
//! lit:      bool
//! version?: u32     absent means legacy v0
//! ```
//!
//! Version 2 stores each cell as one `0x00` byte when empty, or two
//! big-endian bytes otherwise. Older records are migrated while reading and
//! always written back as version 2.

mod migrate;
mod store;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, PIXEL_COUNT};
use crate::error::{ChalkError, Result};
use crate::types::pixel;

pub use migrate::{v0_to_v1, v1_to_v2};
pub use store::{read_record, write_record, CANVAS_EXTENSION};

/// The version written by [`encode`].
pub const CURRENT_VERSION: u32 = 2;

/// Persisted canvas state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanvasRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<Vec<u8>>,

    #[serde(default)]
    pub lit: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// Pixel encodings a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormatVersion {
    /// No version field: one byte per cell.
    Legacy,
    V1,
    V2,
}

impl FormatVersion {
    /// Determine the encoding of a record.
    pub fn of(record: &CanvasRecord) -> Result<Self> {
        match record.version {
            None | Some(0) => Ok(FormatVersion::Legacy),
            Some(1) => Ok(FormatVersion::V1),
            Some(2) => Ok(FormatVersion::V2),
            Some(version) => Err(ChalkError::UnsupportedVersion { version }),
        }
    }
}

/// Whether reading a record will migrate it from an older encoding.
pub fn needs_migration(record: &CanvasRecord) -> bool {
    record.version != Some(CURRENT_VERSION)
}

/// Outcome of decoding a v2 byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeStats {
    /// Cells filled from the stream.
    pub cells: usize,
    /// Bytes consumed.
    pub consumed: usize,
    /// The stream ended between the two bytes of a pixel.
    pub truncated: bool,
}

/// Encode a canvas as a version 2 record.
pub fn encode(canvas: &Canvas) -> CanvasRecord {
    let pixels = (!canvas.is_empty()).then(|| encode_pixels(canvas.pixels()));

    CanvasRecord {
        pixels,
        lit: canvas.is_lit(),
        version: Some(CURRENT_VERSION),
    }
}

/// Encode pixel values into the variable-width v2 stream.
///
/// Values without a colour id cannot be told apart from an empty cell in
/// this format and are written as empty.
pub fn encode_pixels(pixels: &[u16; PIXEL_COUNT]) -> Vec<u8> {
    let length: usize = pixels
        .iter()
        .map(|&p| if pixel::normalize(p) == 0 { 1 } else { 2 })
        .sum();

    let mut bytes = Vec::with_capacity(length);
    for &p in pixels {
        match pixel::normalize(p) {
            0 => bytes.push(0),
            p => bytes.extend_from_slice(&p.to_be_bytes()),
        }
    }
    bytes
}

/// Decode a v2 stream into `out`, stopping after 256 cells or at the end of
/// input. Cells past the end of a short stream are left untouched.
pub fn decode_pixels(bytes: &[u8], out: &mut [u16; PIXEL_COUNT]) -> DecodeStats {
    let mut stats = DecodeStats::default();

    while stats.cells < PIXEL_COUNT && stats.consumed < bytes.len() {
        let lead = bytes[stats.consumed];
        if lead == 0 {
            out[stats.cells] = 0;
            stats.consumed += 1;
        } else {
            let Some(&low) = bytes.get(stats.consumed + 1) else {
                stats.truncated = true;
                break;
            };
            out[stats.cells] = u16::from_be_bytes([lead, low]);
            stats.consumed += 2;
        }
        stats.cells += 1;
    }

    stats
}

/// Bring a record's pixel bytes up to the v2 layout.
pub fn migrate_bytes(record: &CanvasRecord) -> Result<Vec<u8>> {
    let bytes = record.pixels.clone().unwrap_or_default();

    Ok(match FormatVersion::of(record)? {
        FormatVersion::Legacy => {
            let mut bytes = bytes;
            v0_to_v1(&mut bytes);
            v1_to_v2(&bytes)
        }
        FormatVersion::V1 => v1_to_v2(&bytes),
        FormatVersion::V2 => bytes,
    })
}

/// Decode a record of any supported version into a canvas.
pub fn decode(record: &CanvasRecord) -> Result<Canvas> {
    decode_with_stats(record).map(|(canvas, _)| canvas)
}

/// Decode a record, also reporting how the pixel stream was consumed.
pub fn decode_with_stats(record: &CanvasRecord) -> Result<(Canvas, DecodeStats)> {
    let bytes = migrate_bytes(record)?;

    let mut canvas = Canvas::new();
    let stats = decode_pixels(&bytes, canvas.pixels_mut());
    canvas.set_lit(record.lit);

    Ok((canvas, stats))
}
