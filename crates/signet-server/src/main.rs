//! signet-server: a small network-exposed signing/encryption authority.
//!
//! Holds one RSA key pair (private key from PEM, public key derived from
//! an uploaded X.509 certificate) and serves sign/verify/encrypt/decrypt
//! and self-issued timestamping over JSON HTTP.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use signet_crypto::KeyPair;
use signet_server::config::ServerConfig;
use signet_server::state::AppState;

#[derive(Parser)]
#[command(name = "signet-server")]
#[command(about = "Network-exposed RSA signing/encryption authority")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "signet.toml")]
    config: String,

    /// Listen address (overrides config file)
    #[arg(long, env = "SIGNET_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// Directory holding the PEM key material (overrides config file)
    #[arg(long, env = "SIGNET_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("signet_server=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_ref())
        .with_context(|| format!("failed to load config from {}", cli.config))?;

    if let Some(listen_addr) = cli.listen_addr {
        config.listen_addr = listen_addr;
    }
    if let Some(upload_dir) = cli.upload_dir {
        config.upload_dir = upload_dir;
    }

    info!("Starting signet-server");
    info!("Upload dir: {}", config.upload_dir.display());

    // Key material is loaded exactly once. Failure here is fatal: no
    // crypto endpoint can serve without a parsed key pair.
    let keys = KeyPair::load_from_files(&config.private_key_path(), &config.public_key_path())
        .context("failed to load key material; provision PEM files before starting")?;
    info!("Key pair loaded");

    let listen_addr = config.listen_addr.clone();
    let app = signet_server::create_router(AppState::new(keys, config));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!("Listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
