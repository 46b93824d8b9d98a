//! Webhook signature verification.
//!
//! LINE signs every webhook delivery: the `x-line-signature` header is
//! base64(HMAC-SHA256(channel secret, raw request body)). Verification
//! must run on the raw bytes, before any JSON parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature for a body.
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Check a signature header against the raw request body.
pub fn verify(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    sign(channel_secret, body) == signature
}
