//! Support chat routes. Each signed-in user sees only their own thread.

use axum::extract::State;
use axum::response::Json;
use menu::{NewSupportMessage, SupportMessage};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::services::support;
use crate::state::AppState;

/// `GET /api/support/messages`
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<SupportMessage>>, ApiError> {
    Ok(Json(support::list_messages(&state.pool, auth.user.id).await?))
}

/// `POST /api/support/messages`: append and return the updated thread.
pub async fn post_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewSupportMessage>,
) -> Result<Json<Vec<SupportMessage>>, ApiError> {
    let text = menu::validate_support_body(&body.body).map_err(|e| ApiError::Validation(vec![e]))?;
    let thread = support::post_message(&state.pool, auth.user.id, &text).await?;
    tracing::debug!(user_id = %auth.user.id, messages = thread.len(), "support message posted");
    Ok(Json(thread))
}
