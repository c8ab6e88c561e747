use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::config::SecretString;
use crate::utils::hex_codec::{bytes_to_hex, hex_to_bytes};

type HmacSha256 = Hmac<Sha256>;

/// Authenticity gate for inbound webhook deliveries.
pub trait SignatureVerifier: Send + Sync {
    /// Check `header` (`<algorithm>=<hex digest>`) against the raw request body.
    fn verify(&self, header: &str, payload: &[u8]) -> bool;
}

/// HMAC-SHA256 verifier keyed with the shared webhook secret.
#[derive(Clone)]
pub struct HmacSha256Verifier {
    secret: SecretString,
}

impl HmacSha256Verifier {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }
}

impl SignatureVerifier for HmacSha256Verifier {
    fn verify(&self, header: &str, payload: &[u8]) -> bool {
        verify_signature(self.secret.expose(), header, payload)
    }
}

/// Verify a GitHub `X-Hub-Signature-256` header against `payload`.
///
/// Everything after the first `=` is taken as the hex digest; the algorithm
/// name before it is not inspected. A header without `=`, a digest that does
/// not decode, or a digest of the wrong length all fail. The comparison is
/// constant-time (`Mac::verify_slice`).
pub fn verify_signature(secret: &str, header: &str, payload: &[u8]) -> bool {
    let Some((_, digest_hex)) = header.split_once('=') else {
        debug!("Signature header has no digest");
        return false;
    };

    let Ok(expected) = hex_to_bytes(digest_hex) else {
        debug!("Signature digest is not valid hex");
        return false;
    };

    let mut mac = new_mac(secret);
    mac.update(payload);

    mac.verify_slice(&expected).is_ok()
}

/// Compute the hex HMAC-SHA256 digest of `payload`.
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    let mut mac = new_mac(secret);
    mac.update(payload);
    bytes_to_hex(&mac.finalize().into_bytes())
}

/// Format a digest the way GitHub sends it in `X-Hub-Signature-256`.
pub fn format_signature_header(digest_hex: &str) -> String {
    format!("sha256={}", digest_hex)
}

fn new_mac(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length")
}
