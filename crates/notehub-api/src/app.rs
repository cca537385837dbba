//! Application state and router assembly.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::handlers::{notes, verification};
use crate::store::MemoryStore;
use notehub_core::CodeVerifier;
use notehub_crypto::{verify_code, OtpParams};

/// Argon2-backed implementation of the core code verifier seam.
pub struct Argon2CodeVerifier;

impl CodeVerifier for Argon2CodeVerifier {
    fn verify(&self, submitted: &str, code_hash: &str) -> bool {
        verify_code(submitted, code_hash)
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub verifier: Arc<dyn CodeVerifier>,
    /// Argon2id parameters for code hashing.
    pub otp_params: OtpParams,
    /// Lifetime of an issued verification code.
    pub code_ttl: Duration,
}

impl AppState {
    pub fn new(code_ttl: Duration) -> Self {
        Self {
            store: MemoryStore::new(),
            verifier: Arc::new(Argon2CodeVerifier),
            otp_params: OtpParams::default(),
            code_ttl,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State with low-cost hashing parameters for tests.
    pub fn for_tests() -> Self {
        Self {
            store: MemoryStore::new(),
            verifier: Arc::new(Argon2CodeVerifier),
            otp_params: OtpParams {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
            code_ttl: Duration::minutes(10),
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NoteHub API",
        version = "0.4.2",
        description = "Note sharing with per-note and per-collection visibility, and OTP account verification"
    ),
    paths(
        health_check,
        crate::handlers::notes::view_note,
        crate::handlers::verification::request_code,
        crate::handlers::verification::confirm_code,
    ),
    components(schemas(
        notehub_core::Visibility,
        crate::handlers::notes::NoteResponse,
        crate::handlers::verification::RequestCodeRequest,
        crate::handlers::verification::RequestCodeResponse,
        crate::handlers::verification::ConfirmCodeRequest,
        crate::handlers::verification::ConfirmCodeResponse,
    )),
    tags(
        (name = "Notes", description = "Policy-gated note serving"),
        (name = "Verification", description = "One-time code issuance and confirmation"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// Health check endpoint.
#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service is up")))]
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .route("/api/v1/notes/:id", get(notes::view_note))
        .route(
            "/api/v1/verification/request",
            post(verification::request_code),
        )
        .route(
            "/api/v1/verification/confirm",
            post(verification::confirm_code),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
