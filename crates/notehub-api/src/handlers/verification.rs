//! Account verification handlers.
//!
//! Issues one-time codes and confirms submissions. The validation policy
//! in notehub-core decides the outcome; these handlers own what it leaves
//! to the caller: persisting the issued hash, clearing it on success, and
//! wording the user-facing messages.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ApiError, AppState};
use notehub_core::{validate_code, CodeRejection, UserStore};

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RequestCodeRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RequestCodeResponse {
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ConfirmCodeRequest {
    pub user_id: Uuid,
    pub code: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ConfirmCodeResponse {
    pub verified: bool,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Issue a fresh verification code for a user.
///
/// POST /api/v1/verification/request
#[utoipa::path(post, path = "/api/v1/verification/request", tag = "Verification",
    request_body = RequestCodeRequest,
    responses(
        (status = 202, description = "Code issued", body = RequestCodeResponse),
        (status = 404, description = "Unknown user")))]
pub async fn request_code(
    State(state): State<AppState>,
    Json(req): Json<RequestCodeRequest>,
) -> Result<(StatusCode, Json<RequestCodeResponse>), ApiError> {
    let code = state
        .store
        .issue_code(req.user_id, &state.otp_params, state.code_ttl)
        .await?;
    let expires_at = Utc::now() + state.code_ttl;

    tracing::info!(
        op = "issue_code",
        user_id = %req.user_id,
        "verification code issued"
    );

    // Hand-off to the delivery channel (mail, SMS) happens outside this
    // service; the plaintext is dropped here and only the hash persists.
    drop(code);

    Ok((
        StatusCode::ACCEPTED,
        Json(RequestCodeResponse { expires_at }),
    ))
}

/// Confirm a submitted verification code.
///
/// POST /api/v1/verification/confirm
#[utoipa::path(post, path = "/api/v1/verification/confirm", tag = "Verification",
    request_body = ConfirmCodeRequest,
    responses(
        (status = 200, description = "Account verified", body = ConfirmCodeResponse),
        (status = 400, description = "No code issued, or code mismatch"),
        (status = 404, description = "Unknown user"),
        (status = 410, description = "Code expired")))]
pub async fn confirm_code(
    State(state): State<AppState>,
    Json(req): Json<ConfirmCodeRequest>,
) -> Result<Json<ConfirmCodeResponse>, ApiError> {
    let user = state.store.fetch_user(req.user_id).await?;

    let validated = validate_code(
        user.as_ref(),
        &req.code,
        Utc::now(),
        state.verifier.as_ref(),
    );

    match validated {
        Ok(user) => {
            let user_id = user.id;
            state.store.mark_verified(user_id).await?;
            tracing::info!(
                op = "confirm_code",
                user_id = %user_id,
                outcome = "success",
                "account verified"
            );
            Ok(Json(ConfirmCodeResponse { verified: true }))
        }
        Err(reason) => {
            tracing::debug!(
                op = "confirm_code",
                user_id = %req.user_id,
                outcome = "rejected",
                reason = %reason,
                "verification code rejected"
            );
            Err(rejection_response(reason))
        }
    }
}

/// Translate a structured rejection into the user-facing message.
fn rejection_response(reason: CodeRejection) -> ApiError {
    match reason {
        CodeRejection::UserNotFound => ApiError::NotFound("User not provided.".to_string()),
        CodeRejection::NoCodeIssued => ApiError::BadRequest("Request a OTP first".to_string()),
        CodeRejection::Expired => {
            ApiError::Gone("Your OTP has expired. Please re-signup.".to_string())
        }
        CodeRejection::Mismatch => {
            ApiError::BadRequest("Invalid verification code.".to_string())
        }
    }
}
