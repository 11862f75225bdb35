//! Certificate and key provisioning
//!
//! Accepts a PEM certificate and private key upload, persists both
//! verbatim, then extracts the certificate's public key and persists it
//! as SPKI PEM alongside them. The extracted public key is what the
//! verify/encrypt endpoints use after the next restart.
//!
//! The public key is derived from the uploaded certificate independently
//! of whatever private key is on disk. Uploading a certificate for a
//! different key silently creates a mismatched pair; that contract is
//! preserved from the original design and deliberately not validated
//! here.

use axum::extract::{Multipart, State};
use axum::response::Html;
use tracing::{error, info};

use signet_crypto::keystore;

use crate::error::ApiError;
use crate::state::AppState;

const UPLOAD_FORM: &str = r#"<!doctype html>
<title>Upload Certificate and Key</title>
<h1>Upload Your Certificate and Key</h1>
<form method="POST" action="/upload" enctype="multipart/form-data">
    <label for="cert">Upload Certificate (PEM format):</label><br>
    <input type="file" name="cert" required><br><br>
    <label for="key">Upload Private Key (PEM format):</label><br>
    <input type="file" name="key" required><br><br>
    <input type="submit" value="Upload">
</form>
"#;

const UPLOAD_OK: &str = r#"<h1>Files uploaded and public key extracted successfully!</h1>
<p>Restart the server to serve with the new key material.</p>
<p><a href="/upload">Upload more</a></p>
"#;

/// GET /upload — the upload form.
pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /upload — persist cert + key, extract and persist the public key.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<&'static str>, ApiError> {
    let mut cert: Option<Vec<u8>> = None;
    let mut key: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Provisioning(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Provisioning(e.to_string()))?;

        match name.as_str() {
            "cert" => cert = Some(bytes.to_vec()),
            "key" => key = Some(bytes.to_vec()),
            _ => {}
        }
    }

    let (Some(cert), Some(key)) = (cert, key) else {
        return Err(ApiError::MissingField("certificate or key file"));
    };

    persist_and_extract(&state.config, &cert, &key).await?;

    info!(dir = %state.config.upload_dir.display(), "certificate and key provisioned");
    Ok(Html(UPLOAD_OK))
}

/// Write the uploaded material and the extracted public key to disk.
///
/// The cert and key are persisted before extraction is attempted, so a
/// malformed certificate still leaves both files on disk (matching the
/// original provisioning behavior).
async fn persist_and_extract(
    config: &crate::config::ServerConfig,
    cert: &[u8],
    key: &[u8],
) -> Result<(), ApiError> {
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|e| ApiError::Provisioning(e.to_string()))?;

    tokio::fs::write(config.cert_path(), cert)
        .await
        .map_err(|e| ApiError::Provisioning(e.to_string()))?;
    tokio::fs::write(config.private_key_path(), key)
        .await
        .map_err(|e| ApiError::Provisioning(e.to_string()))?;

    let cert_pem = std::str::from_utf8(cert)
        .map_err(|e| ApiError::Provisioning(format!("certificate is not valid PEM text: {e}")))?;

    let public = keystore::public_key_from_cert_pem(cert_pem).map_err(|e| {
        error!(error = %e, "public key extraction failed");
        ApiError::Provisioning(e.to_string())
    })?;
    let public_pem = keystore::public_key_to_pem(&public)
        .map_err(|e| ApiError::Provisioning(e.to_string()))?;

    tokio::fs::write(config.public_key_path(), public_pem)
        .await
        .map_err(|e| ApiError::Provisioning(e.to_string()))?;

    Ok(())
}
