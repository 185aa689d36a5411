//! Fixed-width Shift_JIS string fields.
//!
//! VMD stores bone, morph, and IK names as fixed-width Shift_JIS byte
//! arrays, NUL-terminated when shorter than the field. MMD pads the tail
//! with whatever bytes happened to follow in memory, so the raw bytes are
//! kept in the document model and only decoded on demand.

use encoding_rs::SHIFT_JIS;

/// Decode a fixed-width name field up to its first NUL.
pub fn decode_fixed(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, _, _) = SHIFT_JIS.decode(&bytes[..end]);
    text.into_owned()
}

/// Encode `text` into a NUL-padded field of `N` bytes.
///
/// Text longer than the field is cut at the field width, as MMD itself does.
pub fn encode_fixed<const N: usize>(text: &str) -> [u8; N] {
    let (encoded, _, _) = SHIFT_JIS.encode(text);
    let mut field = [0u8; N];
    let len = encoded.len().min(N);
    field[..len].copy_from_slice(&encoded[..len]);
    field
}
