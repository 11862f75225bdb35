//! Signet server: HTTP plumbing around the signet-crypto core.
//!
//! One operation per endpoint, JSON bodies, plus the provisioning
//! endpoints that persist certificate/key uploads. The key pair is
//! loaded once at startup and shared immutably across requests.

pub mod config;
pub mod error;
pub mod provision;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Build the application router over shared state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sign", post(routes::sign))
        .route("/verify", post(routes::verify))
        .route("/encrypt", post(routes::encrypt))
        .route("/decrypt", post(routes::decrypt))
        .route("/timestamp", post(routes::timestamp))
        .route("/upload", get(provision::upload_form).post(provision::upload))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
