use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::edit::session::EditError;
use crate::profile::generator::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Profile(ProfileError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Profile(e @ ProfileError::Generation) => {
                // Cause was already logged where it happened; the client gets the generic text.
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR", e.to_string())
            }
            AppError::Edit(e @ EditError::EmailValidation { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMAIL_VALIDATION_ERROR",
                e.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
