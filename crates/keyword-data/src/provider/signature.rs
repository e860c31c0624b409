//! SearchAd request signing.
//!
//! The signed message is `timestamp.method.uri` and the HMAC key is the
//! secret's raw UTF-8 bytes. The secret looks like base64 but the service
//! expects it to be used as-is; do not decode it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the base64 HMAC-SHA256 signature of `timestamp.method.uri`.
///
/// An empty secret still yields a signature; the service rejects it.
pub fn sign(timestamp: &str, method: &str, uri: &str, secret: &[u8]) -> String {
    let message = format!("{}.{}.{}", timestamp, method, uri);
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signature() {
        let sig = sign("1700000000000", "GET", "/keywordstool", b"secret");
        assert_eq!(sig, "A6Gzu+sW9C2ovLsH+T+rFrie81KwHy1xrodUFQERKf4=");
    }

    #[test]
    fn test_deterministic() {
        let a = sign("1700000000000", "GET", "/keywordstool", b"secret");
        let b = sign("1700000000000", "GET", "/keywordstool", b"secret");
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_argument_changes_signature() {
        let base = sign("1700000000000", "GET", "/keywordstool", b"secret");
        assert_ne!(base, sign("1700000000001", "GET", "/keywordstool", b"secret"));
        assert_ne!(base, sign("1700000000000", "POST", "/keywordstool", b"secret"));
        assert_ne!(base, sign("1700000000000", "GET", "/keywordstool2", b"secret"));
        assert_ne!(base, sign("1700000000000", "GET", "/keywordstool", b"secret2"));
    }

    #[test]
    fn test_secret_is_not_base64_decoded() {
        // "c2VjcmV0" is base64 for "secret"; the two keys must not collide.
        let raw = sign("1", "GET", "/keywordstool", b"c2VjcmV0");
        let decoded = sign("1", "GET", "/keywordstool", b"secret");
        assert_ne!(raw, decoded);
    }

    #[test]
    fn test_empty_secret_still_signs() {
        let sig = sign("1", "GET", "/keywordstool", b"");
        assert_eq!(sig, "aI6Ho3GVVcZEQh4VSmTESSKXjDFIxvpM3PrjLgjYLOE=");
    }
}
