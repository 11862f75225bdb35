//! Self-issued timestamp tokens
//!
//! A timestamp token binds caller data to a wall-clock instant by signing
//! the raw concatenation `data || timestamp` (no separator). The trust
//! model is identical to a plain signature: it proves that whoever holds
//! the private key asserted this data existed bundled with this claimed
//! time, nothing more. No external time source, no nonce, no chaining
//! across tokens.

use chrono::Utc;
use rsa::RsaPrivateKey;

use crate::error::CryptoError;
use crate::ops;

/// ISO-8601 UTC with microsecond precision and no timezone suffix.
///
/// Interoperability constraint: verifiers reconstruct `data || timestamp`
/// byte-for-byte, so the format must stay stable.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A wall-clock instant bound to data by a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampToken {
    /// The instant embedded in the signed concatenation. Must be returned
    /// to the caller exactly as signed, byte-for-byte.
    pub timestamp: String,
    /// PKCS#1 v1.5 / SHA-256 signature over `data || timestamp`.
    pub token: Vec<u8>,
}

/// Issue a timestamp token for `data` at the current UTC instant.
pub fn stamp(data: &[u8], private: &RsaPrivateKey) -> Result<TimestampToken, CryptoError> {
    let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    stamp_at(data, timestamp, private)
}

/// Issue a token for a caller-supplied instant string. Split out so tests
/// can pin the instant.
fn stamp_at(
    data: &[u8],
    timestamp: String,
    private: &RsaPrivateKey,
) -> Result<TimestampToken, CryptoError> {
    let mut bound = Vec::with_capacity(data.len() + timestamp.len());
    bound.extend_from_slice(data);
    bound.extend_from_slice(timestamp.as_bytes());

    let token = ops::sign(&bound, private)?;
    Ok(TimestampToken { timestamp, token })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystore;
    use crate::ops::VerifyOutcome;

    fn test_key() -> RsaPrivateKey {
        keystore::load_private_key_pem(include_str!("../tests/fixtures/test_key_pkcs8.pem"))
            .unwrap()
    }

    #[test]
    fn test_token_verifies_against_reconstruction() {
        let private = test_key();
        let public = private.to_public_key();

        let data = b"document contents";
        let token = stamp(data, &private).unwrap();

        // A verifier reconstructs data || timestamp and checks the signature
        let mut bound = data.to_vec();
        bound.extend_from_slice(token.timestamp.as_bytes());
        assert_eq!(
            ops::verify(&bound, &token.token, &public),
            VerifyOutcome::Valid
        );
    }

    #[test]
    fn test_token_rejects_other_data() {
        let private = test_key();
        let public = private.to_public_key();

        let token = stamp(b"original", &private).unwrap();

        let mut bound = b"forgery".to_vec();
        bound.extend_from_slice(token.timestamp.as_bytes());
        assert!(!ops::verify(&bound, &token.token, &public).is_valid());
    }

    #[test]
    fn test_token_rejects_shifted_timestamp() {
        let private = test_key();
        let public = private.to_public_key();

        let data = b"backdating attempt";
        let token = stamp(data, &private).unwrap();

        let mut earlier = token.timestamp.clone().into_bytes();
        *earlier.last_mut().unwrap() ^= 0x01;

        let mut bound = data.to_vec();
        bound.extend_from_slice(&earlier);
        assert!(!ops::verify(&bound, &token.token, &public).is_valid());
    }

    #[test]
    fn test_timestamp_format() {
        let private = test_key();
        let token = stamp(b"x", &private).unwrap();

        // 2026-08-29T18:51:00.123456 — 26 chars, no timezone suffix
        assert_eq!(token.timestamp.len(), 26);
        assert_eq!(token.timestamp.as_bytes()[10], b'T');
        assert!(!token.timestamp.ends_with('Z'));
        assert!(!token.timestamp.contains('+'));
    }

    #[test]
    fn test_pinned_instant_binds_exactly() {
        let private = test_key();
        let public = private.to_public_key();

        let token = stamp_at(
            b"data",
            "2026-08-29T12:00:00.000000".to_string(),
            &private,
        )
        .unwrap();
        assert_eq!(token.timestamp, "2026-08-29T12:00:00.000000");

        let bound = b"data2026-08-29T12:00:00.000000";
        assert!(ops::verify(bound, &token.token, &public).is_valid());
    }
}
