//! Hex and base64 conversion between text and byte buffers.
//!
//! Decoding is strict: a non-hex character or an odd-length string is an
//! error. Nothing is silently dropped or replaced with zero.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{TypeError, TypeResult};

/// Decode an unprefixed hex string into bytes.
///
/// Each pair of characters becomes one byte, the first character being the
/// high nibble. Upper- and lower-case digits are both accepted.
pub fn decode(hex: &str) -> TypeResult<Vec<u8>> {
    hex::decode(hex).map_err(|e| TypeError::InvalidEncoding(e.to_string()))
}

/// Encode bytes as lowercase hex with no prefix.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Remove a single leading `0x` or `0X`, if present.
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode a possibly `0x`-prefixed hex string.
pub fn decode_prefixed(s: &str) -> TypeResult<Vec<u8>> {
    decode(strip_prefix(s))
}

/// Decode a standard-alphabet, padded base64 string into bytes.
pub fn decode_base64(s: &str) -> TypeResult<Vec<u8>> {
    STANDARD
        .decode(s)
        .map_err(|e| TypeError::InvalidEncoding(e.to_string()))
}

/// Decode hex into a fixed-size array, failing if the length differs.
pub fn decode_array<const N: usize>(hex: &str) -> TypeResult<[u8; N]> {
    let bytes = decode(hex)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| TypeError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}
