//! Error responses for the JSON endpoints.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::contact::{ContactError, FieldErrors};
use crate::i18n::Messages;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(BTreeMap<&'static str, &'static str>),

    #[error("Invalid revalidation secret")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Message could not be delivered, please call {phone}")]
    Upstream { phone: String },
}

impl ApiError {
    /// Field errors keyed by wire name, with messages from `t`.
    pub fn validation(errors: &FieldErrors, t: &Messages) -> Self {
        ApiError::Validation(
            errors
                .fields()
                .iter()
                .map(|field| (field.name(), field.error_message(t)))
                .collect(),
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Contact(_) => StatusCode::CONFLICT,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Contact(_) => "SUBMISSION_IN_PROGRESS",
            ApiError::Upstream { .. } => "DELIVERY_FAILED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut error = json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        match &self {
            ApiError::Validation(fields) => error["fields"] = json!(fields),
            ApiError::Upstream { phone } => error["phone"] = json!(phone),
            _ => {}
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
