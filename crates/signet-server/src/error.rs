//! API error responses
//!
//! Maps the error taxonomy onto the wire contract: every failure becomes
//! a structured `{"error": ...}` JSON body. Input faults and crypto
//! failures are 400; non-text decrypt output is 500 (the caller asked for
//! text and the key produced bytes that are not).
//!
//! Signature-invalid is deliberately NOT represented here: it is a normal
//! outcome and gets its own response shape in the verify handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use signet_crypto::CryptoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty.
    #[error("No {0} provided")]
    MissingField(&'static str),

    /// A base64-encoded field did not decode.
    #[error("Invalid base64 in {field}: {reason}")]
    InvalidBase64 { field: &'static str, reason: String },

    /// The underlying cryptographic operation failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Decrypted bytes are not valid UTF-8 but the caller requires text.
    #[error("Decrypted data is not valid UTF-8: {0}")]
    NotText(String),

    /// Certificate/key provisioning failed after the files were accepted.
    #[error("Provisioning failed: {0}")]
    Provisioning(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_)
            | ApiError::InvalidBase64 { .. }
            | ApiError::Crypto(_) => StatusCode::BAD_REQUEST,
            ApiError::NotText(_) | ApiError::Provisioning(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_matches_wire_contract() {
        let err = ApiError::MissingField("data");
        assert_eq!(err.to_string(), "No data provided");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_crypto_errors_are_client_faults() {
        let err = ApiError::Crypto(CryptoError::MessageTooLong { len: 191, max: 190 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::Crypto(CryptoError::DecryptionFailed("bad".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_non_text_output_is_server_fault() {
        let err = ApiError::NotText("invalid utf-8 sequence".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
