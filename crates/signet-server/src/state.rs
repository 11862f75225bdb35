//! Shared application state
//!
//! One immutable key pair, loaded once at startup and shared read-only
//! across all request handlers. No locking: nothing here mutates after
//! construction. Re-provisioning writes new PEM files to disk but the
//! in-memory pair stays fixed until restart, so every request observes
//! exactly one coherent key pair.

use std::sync::Arc;

use signet_crypto::KeyPair;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub keys: Arc<KeyPair>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(keys: KeyPair, config: ServerConfig) -> Self {
        Self {
            keys: Arc::new(keys),
            config: Arc::new(config),
        }
    }
}
