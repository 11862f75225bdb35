//! Key pair loading from PEM-encoded material
//!
//! The process holds exactly one RSA key pair. The private key comes from
//! an unencrypted PKCS#8 or PKCS#1 PEM file; the public key comes either
//! from a SubjectPublicKeyInfo PEM file or is extracted from an X.509
//! certificate. Loading happens once at startup and the resulting
//! [`KeyPair`] is immutable for the process lifetime.

use std::fs;
use std::path::Path;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use x509_cert::der::referenced::OwnedToRef;
use x509_cert::der::DecodePem;
use x509_cert::Certificate;

use crate::error::KeyLoadError;

/// The process-wide RSA key pair.
///
/// The public key is loaded independently of the private key (it is
/// derived from an uploaded certificate, not from the private key on
/// disk), so the two are NOT validated to match. An operator who uploads
/// a certificate for a different key silently creates a mismatched pair.
/// That is a documented caller responsibility, not a checked invariant.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub private: RsaPrivateKey,
    pub public: RsaPublicKey,
}

impl KeyPair {
    /// Load both halves of the pair from PEM files on disk.
    ///
    /// Any failure here is fatal at startup: the crypto endpoints cannot
    /// serve without parsed key material.
    pub fn load_from_files(
        private_key_path: &Path,
        public_key_path: &Path,
    ) -> Result<Self, KeyLoadError> {
        let private_pem = fs::read_to_string(private_key_path)?;
        let public_pem = fs::read_to_string(public_key_path)?;

        Ok(Self {
            private: load_private_key_pem(&private_pem)?,
            public: load_public_key_pem(&public_pem)?,
        })
    }
}

/// Parse an unencrypted PEM private key, accepting PKCS#8 (`PRIVATE KEY`)
/// or PKCS#1 (`RSA PRIVATE KEY`) encodings.
///
/// Encrypted PKCS#8 blocks are rejected with [`KeyLoadError::EncryptedKey`]
/// rather than a generic parse failure, since "you need to strip the
/// passphrase" is the actionable message for the operator.
pub fn load_private_key_pem(pem: &str) -> Result<RsaPrivateKey, KeyLoadError> {
    if pem.contains("ENCRYPTED PRIVATE KEY") {
        return Err(KeyLoadError::EncryptedKey);
    }

    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| KeyLoadError::InvalidPem(e.to_string()))
}

/// Parse a PEM public key, accepting SPKI (`PUBLIC KEY`) or PKCS#1
/// (`RSA PUBLIC KEY`) encodings.
pub fn load_public_key_pem(pem: &str) -> Result<RsaPublicKey, KeyLoadError> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| KeyLoadError::InvalidPem(e.to_string()))
}

/// Extract the RSA public key from a PEM X.509 certificate.
///
/// Only the SubjectPublicKeyInfo is read; the certificate is used purely
/// as a public-key container. No chain, expiry, or subject validation.
pub fn public_key_from_cert_pem(pem: &str) -> Result<RsaPublicKey, KeyLoadError> {
    let cert = Certificate::from_pem(pem.as_bytes())
        .map_err(|e| KeyLoadError::MalformedCertificate(e.to_string()))?;

    let spki = cert.tbs_certificate.subject_public_key_info.owned_to_ref();
    RsaPublicKey::try_from(spki)
        .map_err(|e| KeyLoadError::MalformedCertificate(e.to_string()))
}

/// Serialize a public key to SPKI PEM, the format the provisioning path
/// persists after extracting a key from an uploaded certificate.
pub fn public_key_to_pem(key: &RsaPublicKey) -> Result<String, KeyLoadError> {
    key.to_public_key_pem(LineEnding::LF)
        .map_err(|e| KeyLoadError::InvalidPem(e.to_string()))
}
