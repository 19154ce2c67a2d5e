//! Forward-only migration of older pixel encodings.
//!
//! - v0: one byte per cell, a coarse colour index.
//! - v1: one byte per cell, colour index scaled by 4 with the low two bits
//!   holding a shade.
//! - v2: the current variable-width encoding (see [`super::decode_pixels`]).

use crate::canvas::PIXEL_COUNT;

/// v0 -> v1: scale every byte by 4 in place (byte arithmetic, wrapping).
pub fn v0_to_v1(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        *byte = byte.wrapping_mul(4);
    }
}

/// v1 -> v2: expand each non-zero byte into a two-byte pixel.
///
/// The output is always `PIXEL_COUNT * 2` bytes, the largest a v2 stream can
/// be. Unused tail bytes are zero and decode as empty cells. Input that would
/// overflow the buffer is dropped.
pub fn v1_to_v2(bytes: &[u8]) -> Vec<u8> {
    let mut converted = vec![0u8; PIXEL_COUNT * 2];
    let mut next = 0;

    for &byte in bytes {
        if byte == 0 {
            if next >= converted.len() {
                break;
            }
            converted[next] = 0;
            next += 1;
        } else {
            if next + 1 >= converted.len() {
                break;
            }
            // v1 bytes were stored signed; keep signed division.
            converted[next] = ((byte as i8) / 4) as u8;
            converted[next + 1] = (byte & 3) << 4;
            next += 2;
        }
    }

    converted
}
