//! Crypto endpoint handlers
//!
//! One operation per endpoint, JSON request and response bodies. Raw
//! bytes cross into the core; base64 encoding and decoding happens here
//! at the wire boundary.
//!
//! Every request field is `Option` so that a `{}` body produces a
//! structured 400, never a deserialization rejection. Empty strings are
//! treated the same as missing fields.

use axum::extract::State;
use axum::response::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use signet_crypto::{ops, timestamp, VerifyOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Pull a required non-empty field out of a request body.
fn require(field: Option<String>, name: &'static str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingField(name)),
    }
}

fn decode_base64(value: &str, field: &'static str) -> Result<Vec<u8>, ApiError> {
    BASE64.decode(value).map_err(|e| ApiError::InvalidBase64 {
        field,
        reason: e.to_string(),
    })
}

// === POST /sign ===

#[derive(Deserialize)]
pub struct SignRequest {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Serialize)]
pub struct SignResponse {
    pub signature: String,
}

pub async fn sign(
    State(state): State<AppState>,
    Json(req): Json<SignRequest>,
) -> Result<Json<SignResponse>, ApiError> {
    let data = require(req.data, "data")?;

    let signature = ops::sign(data.as_bytes(), &state.keys.private)?;
    debug!(bytes = data.len(), "signed request data");

    Ok(Json(SignResponse {
        signature: BASE64.encode(signature),
    }))
}

// === POST /verify ===

#[derive(Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Signature-invalid is a reported outcome, not an error: it gets the
/// `{message, error}` shape with a 400, distinct from the `{error}` shape
/// used for malformed input.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<(axum::http::StatusCode, Json<VerifyResponse>), ApiError> {
    let (data, signature_b64) = match (req.data, req.signature) {
        (Some(d), Some(s)) if !d.is_empty() && !s.is_empty() => (d, s),
        _ => return Err(ApiError::MissingField("data or signature")),
    };

    let signature = decode_base64(&signature_b64, "signature")?;

    let (status, response) = match ops::verify(data.as_bytes(), &signature, &state.keys.public) {
        VerifyOutcome::Valid => (
            axum::http::StatusCode::OK,
            VerifyResponse {
                message: "Signature is valid",
                error: None,
            },
        ),
        VerifyOutcome::Invalid { reason }
        | VerifyOutcome::MalformedSignature { reason } => {
            warn!(%reason, "signature verification failed");
            (
                axum::http::StatusCode::BAD_REQUEST,
                VerifyResponse {
                    message: "Signature is invalid",
                    error: Some(reason),
                },
            )
        }
    };

    Ok((status, Json(response)))
}

// === POST /encrypt ===

#[derive(Deserialize)]
pub struct EncryptRequest {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Serialize)]
pub struct EncryptResponse {
    pub encrypted_data: String,
}

pub async fn encrypt(
    State(state): State<AppState>,
    Json(req): Json<EncryptRequest>,
) -> Result<Json<EncryptResponse>, ApiError> {
    let data = require(req.data, "data")?;

    let ciphertext = ops::encrypt(data.as_bytes(), &state.keys.public)?;

    Ok(Json(EncryptResponse {
        encrypted_data: BASE64.encode(ciphertext),
    }))
}

// === POST /decrypt ===

#[derive(Deserialize)]
pub struct DecryptRequest {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Serialize)]
pub struct DecryptResponse {
    pub decrypted_data: String,
}

pub async fn decrypt(
    State(state): State<AppState>,
    Json(req): Json<DecryptRequest>,
) -> Result<Json<DecryptResponse>, ApiError> {
    let data = require(req.data, "encrypted data")?;

    let ciphertext = decode_base64(&data, "encrypted data")?;
    let plaintext = ops::decrypt(&ciphertext, &state.keys.private)?;

    // The wire contract returns text; non-UTF-8 output is a server-side
    // 500 (EncodingError), not a client fault.
    let decrypted_data =
        String::from_utf8(plaintext).map_err(|e| ApiError::NotText(e.to_string()))?;

    Ok(Json(DecryptResponse { decrypted_data }))
}

// === POST /timestamp ===

#[derive(Deserialize)]
pub struct TimestampRequest {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Serialize)]
pub struct TimestampResponse {
    pub timestamp: String,
    pub timestamp_token: String,
}

pub async fn timestamp(
    State(state): State<AppState>,
    Json(req): Json<TimestampRequest>,
) -> Result<Json<TimestampResponse>, ApiError> {
    let data = require(req.data, "data")?;

    let token = timestamp::stamp(data.as_bytes(), &state.keys.private)?;

    Ok(Json(TimestampResponse {
        timestamp: token.timestamp,
        timestamp_token: BASE64.encode(token.token),
    }))
}

// === GET /health ===

pub async fn health() -> &'static str {
    "OK"
}
