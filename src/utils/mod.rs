// Utility functions
// Hex decoding, webhook signatures, text encoding

pub mod encoding;
pub mod hex_codec;
pub mod signature;

pub use encoding::encode_uri_component;
pub use hex_codec::{bytes_to_hex, hex_to_bytes, HexError};
pub use signature::{
    format_signature_header, sign_payload, verify_signature, HmacSha256Verifier,
    SignatureVerifier,
};
