//! Stateless RSA operations with fixed scheme parameters
//!
//! Each operation is a pure function of (input bytes, key handle):
//! no shared mutable state, safe under any concurrency model.
//!
//! - sign/verify: SHA-256 digest, PKCS#1 v1.5 padding
//! - encrypt/decrypt: RSA-OAEP, SHA-256 digest + SHA-256 MGF1, empty label

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// Outcome of a signature verification.
///
/// An invalid signature is an expected, reportable result, not a fault,
/// so verification never returns an `Err` and never panics. Malformed
/// signature bytes (wrong structure, not merely a mismatch) are reported
/// as their own state so callers can tell bad input from a failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The signature matches the message under the given public key.
    Valid,
    /// The signature is well-formed but does not match.
    Invalid { reason: String },
    /// The signature bytes are not a signature for this key at all
    /// (wrong length for the modulus, or structurally unparseable).
    MalformedSignature { reason: String },
}

impl VerifyOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}

/// Sign a message: SHA-256 digest, PKCS#1 v1.5 padding.
///
/// Deterministic: the same message and key always produce the same
/// signature bytes.
pub fn sign(message: &[u8], private: &RsaPrivateKey) -> Result<Vec<u8>, CryptoError> {
    let signing_key = SigningKey::<Sha256>::new(private.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
    Ok(signature.to_vec())
}

/// Verify a PKCS#1 v1.5 / SHA-256 signature over a message.
///
/// A PKCS#1 v1.5 signature is exactly one modulus in length; anything
/// else is malformed input, not a failed check, and is reported as such.
pub fn verify(message: &[u8], signature: &[u8], public: &RsaPublicKey) -> VerifyOutcome {
    if signature.len() != public.size() {
        return VerifyOutcome::MalformedSignature {
            reason: format!(
                "signature is {} bytes, expected {} for this key",
                signature.len(),
                public.size()
            ),
        };
    }

    let signature = match Signature::try_from(signature) {
        Ok(s) => s,
        Err(e) => {
            return VerifyOutcome::MalformedSignature {
                reason: e.to_string(),
            }
        }
    };

    let verifying_key = VerifyingKey::<Sha256>::new(public.clone());
    match verifying_key.verify(message, &signature) {
        Ok(()) => VerifyOutcome::Valid,
        Err(e) => VerifyOutcome::Invalid {
            reason: e.to_string(),
        },
    }
}

/// Maximum plaintext length for OAEP under the given key:
/// `key_bytes - 2 * hash_len - 2`, which is 190 for a 2048-bit key.
pub fn max_oaep_payload(public: &RsaPublicKey) -> usize {
    public
        .size()
        .saturating_sub(2 * Sha256::output_size() + 2)
}

/// Encrypt with RSA-OAEP (SHA-256 digest, SHA-256 MGF1, empty label).
///
/// The plaintext length is checked up front so an oversize message fails
/// with the exact limit in the error instead of an opaque padding error.
pub fn encrypt(plaintext: &[u8], public: &RsaPublicKey) -> Result<Vec<u8>, CryptoError> {
    let max = max_oaep_payload(public);
    if plaintext.len() > max {
        return Err(CryptoError::MessageTooLong {
            len: plaintext.len(),
            max,
        });
    }

    let mut rng = rand::rngs::OsRng;
    public
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))
}

/// Decrypt RSA-OAEP ciphertext (SHA-256 digest, SHA-256 MGF1, empty label).
///
/// Ciphertext that does not match the OAEP structure for this key fails
/// with [`CryptoError::DecryptionFailed`].
pub fn decrypt(ciphertext: &[u8], private: &RsaPrivateKey) -> Result<Vec<u8>, CryptoError> {
    private
        .decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
}
