//! API error type and its HTTP mapping.
//!
//! Handlers return `Result<_, ApiError>`; the `IntoResponse` impl picks the
//! status and renders `{"error": ..., "fields": [...]}`. Database failures are
//! logged here and surface to clients only as a generic 500.

use access::Denial;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use menu::FieldError;
use serde::Serialize;

use crate::rate_limit::RateLimitError;
use crate::services::email_auth::EmailAuthError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Denied(#[from] Denial),
    #[error("not found")]
    NotFound,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error(transparent)]
    EmailAuth(#[from] EmailAuthError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Denied(Denial::Unauthenticated) => StatusCode::UNAUTHORIZED,
            Self::Denied(Denial::Unauthorized) => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::EmailAuth(EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode) => StatusCode::BAD_REQUEST,
            Self::EmailAuth(EmailAuthError::VerificationFailed) => StatusCode::UNAUTHORIZED,
            Self::EmailAuth(EmailAuthError::EmailDelivery(_)) => StatusCode::BAD_GATEWAY,
            Self::EmailAuth(EmailAuthError::Db(_)) | Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for a single-field validation failure.
    #[must_use]
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal error".to_owned()
        } else {
            self.to_string()
        };
        let fields = match self {
            Self::Validation(fields) => fields,
            _ => Vec::new(),
        };
        (status, Json(ErrorBody { error, fields })).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
