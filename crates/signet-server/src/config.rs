//! Server configuration
//!
//! Loaded from a TOML file with CLI/env overrides applied in `main`.
//! Key material lives as three PEM files under `upload_dir`; the paths
//! are fixed relative to it, matching what the provisioning endpoint
//! writes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CERT_FILE: &str = "cert.pem";
pub const PRIVATE_KEY_FILE: &str = "private_key.pem";
pub const PUBLIC_KEY_FILE: &str = "public_key.pem";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding the persisted certificate and key PEMs.
    ///
    /// Key material is read from here once at startup. Re-provisioning
    /// through the upload endpoint rewrites these files but only takes
    /// effect after a restart.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            upload_dir: default_upload_dir(),
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn cert_path(&self) -> PathBuf {
        self.upload_dir.join(CERT_FILE)
    }

    pub fn private_key_path(&self) -> PathBuf {
        self.upload_dir.join(PRIVATE_KEY_FILE)
    }

    pub fn public_key_path(&self) -> PathBuf {
        self.upload_dir.join(PUBLIC_KEY_FILE)
    }
}
