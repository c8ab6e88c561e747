use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(String),
}

/// Decode a hexadecimal string into bytes.
///
/// Only complete digit pairs are decoded: a trailing lone character is
/// dropped rather than rejected, so `"abc"` decodes to `[0xab]`. Senders in
/// the wild have relied on this, so it is kept for compatibility.
///
/// Characters outside `[0-9a-fA-F]` inside a pair are rejected with
/// [`HexError::InvalidEncoding`].
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, HexError> {
    let raw = input.as_bytes();
    let even = &raw[..raw.len() - raw.len() % 2];

    hex::decode(even).map_err(|e| HexError::InvalidEncoding(e.to_string()))
}

/// Lowercase hex encoding, the inverse of [`hex_to_bytes`] for even-length input.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
