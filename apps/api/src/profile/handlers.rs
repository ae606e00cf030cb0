//! Axum route handlers for the Profile API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::edit::email::{is_valid_email, INVALID_EMAIL_MESSAGE};
use crate::edit::session::EditError;
use crate::errors::AppError;
use crate::profile::models::CompanyProfile;
use crate::profile::service_lines::suggest_service_lines;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateProfileRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateProfileResponse {
    pub profile: CompanyProfile,
    pub suggested_service_lines: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateEmailRequest {
    pub email: String,
}

/// POST /api/v1/profiles/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateProfileRequest>,
) -> Result<Json<GenerateProfileResponse>, AppError> {
    let profile = state.generator.generate(&req.url).await?;
    let suggested_service_lines = suggest_service_lines(&profile);
    Ok(Json(GenerateProfileResponse {
        profile,
        suggested_service_lines,
    }))
}

/// POST /api/v1/profiles/emails/validate
pub async fn handle_validate_email(
    Json(req): Json<ValidateEmailRequest>,
) -> Result<StatusCode, AppError> {
    let email = req.email.trim();
    if !is_valid_email(email) {
        return Err(EditError::EmailValidation {
            value: email.to_string(),
            message: INVALID_EMAIL_MESSAGE.to_string(),
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
