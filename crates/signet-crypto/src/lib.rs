//! # Signet Crypto
//!
//! RSA key-material lifecycle and cryptographic operation contracts for
//! the Signet signing authority.
//!
//! Provides key loading from PEM-encoded material (including public-key
//! extraction from X.509 certificates), fixed-scheme sign/verify and
//! encrypt/decrypt operations, and self-issued timestamp tokens.
//!
//! ## Scheme selection
//!
//! - Signatures: SHA-256 digest with PKCS#1 v1.5 padding (deterministic,
//!   interoperable with any standard RSA verifier)
//! - Encryption: RSA-OAEP with SHA-256 digest and SHA-256 MGF1, empty label
//!
//! The split is deliberate and load-bearing: external verifiers expect one
//! specific scheme per operation.
//!
//! ## Key Types
//!
//! - [`KeyPair`]: the process-wide RSA key pair, loaded once at startup
//! - [`VerifyOutcome`]: three-state signature verification result
//! - [`TimestampToken`]: a wall-clock instant bound to data by a signature
//!
//! ## Example
//!
//! ```rust,ignore
//! use signet_crypto::{keystore, ops, timestamp};
//!
//! let pair = keystore::KeyPair::load_from_files(
//!     "uploads/private_key.pem".as_ref(),
//!     "uploads/public_key.pem".as_ref(),
//! )?;
//!
//! let sig = ops::sign(b"hello", &pair.private)?;
//! assert!(ops::verify(b"hello", &sig, &pair.public).is_valid());
//!
//! let token = timestamp::stamp(b"hello", &pair.private)?;
//! ```

pub mod error;
pub mod keystore;
pub mod ops;
pub mod timestamp;

// Re-exports
pub use error::{CryptoError, KeyLoadError};
pub use keystore::KeyPair;
pub use ops::{max_oaep_payload, VerifyOutcome};
pub use timestamp::TimestampToken;

// Re-export the rsa key handles for convenience
pub use rsa::{RsaPrivateKey, RsaPublicKey};
