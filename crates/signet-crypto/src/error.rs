//! Error types for signet-crypto

use thiserror::Error;

/// Errors that can occur while loading key material at startup.
///
/// Any of these is fatal for the serving process: without a parsed key
/// pair there is nothing the crypto endpoints can do.
#[derive(Debug, Error)]
pub enum KeyLoadError {
    #[error("Invalid PEM key material: {0}")]
    InvalidPem(String),

    #[error("Private key is encrypted; password-protected keys are not supported")]
    EncryptedKey,

    #[error("Malformed certificate: {0}")]
    MalformedCertificate(String),

    #[error("Failed to read key material: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during cryptographic operations.
///
/// Signature-verification failure is deliberately absent: an invalid
/// signature is an expected outcome, reported via
/// [`VerifyOutcome`](crate::ops::VerifyOutcome), not an error.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Message too long for OAEP: {len} bytes, maximum is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_load_error_display() {
        let err = KeyLoadError::InvalidPem("bad header".to_string());
        assert!(format!("{}", err).contains("Invalid PEM"));
        assert!(format!("{}", err).contains("bad header"));

        let err = KeyLoadError::EncryptedKey;
        assert!(format!("{}", err).contains("encrypted"));

        let err = KeyLoadError::MalformedCertificate("truncated".to_string());
        assert!(format!("{}", err).contains("Malformed certificate"));
    }

    #[test]
    fn test_crypto_error_display() {
        let err = CryptoError::MessageTooLong { len: 191, max: 190 };
        let msg = format!("{}", err);
        assert!(msg.contains("191"));
        assert!(msg.contains("190"));

        let err = CryptoError::DecryptionFailed("not OAEP".to_string());
        assert!(format!("{}", err).contains("Decryption failed"));
    }
}
