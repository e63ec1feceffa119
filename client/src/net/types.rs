//! Client-side DTOs for auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use access::{Role, Session};
use menu::FieldError;
use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/me` and the verify endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Gate-facing view of this user.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::authenticated(self.id.clone(), self.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Error body emitted by every failing API route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub fields: Vec<FieldError>,
}

/// A failed API call, with any per-field validation messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status, or 0 when the request never completed.
    pub status: u16,
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl ApiFailure {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self { status: 0, message: message.into(), fields: Vec::new() }
    }

    /// Build from a non-2xx response body. Falls back to a status message when
    /// the body is not the usual JSON error shape.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.error.is_empty() => {
                Self { status, message: parsed.error, fields: parsed.fields }
            }
            _ => Self { status, message: format!("request failed: {status}"), fields: Vec::new() },
        }
    }

    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        self.status == 401
    }

    /// Message for one field, if the server rejected it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.field == name).map(|f| f.message.as_str())
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
