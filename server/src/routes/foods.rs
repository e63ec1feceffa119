//! Menu routes. Listing is public; creation requires the admin role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use menu::{Food, FoodCategory, FoodPage, NewFood};
use serde::Deserialize;
use uuid::Uuid;

use super::auth::RequireAdmin;
use crate::error::ApiError;
use crate::services::food;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListFoodsQuery {
    page: Option<u32>,
    per_page: Option<u32>,
    category: Option<String>,
}

/// Resolved listing parameters.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub category: Option<FoodCategory>,
}

pub(crate) fn parse_list_query(query: &ListFoodsQuery) -> Result<ListParams, ApiError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("" | "all") => None,
        Some(raw) => Some(
            raw.parse::<FoodCategory>()
                .map_err(|e| ApiError::field("category", e.to_string()))?,
        ),
    };
    Ok(ListParams {
        page: query.page.unwrap_or(1).max(1),
        per_page: menu::clamp_per_page(query.per_page),
        category,
    })
}

/// `GET /api/foods`: paginated menu.
pub async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<ListFoodsQuery>,
) -> Result<Json<FoodPage>, ApiError> {
    let params = parse_list_query(&query)?;
    let page = food::list_foods(&state.pool, params.page, params.per_page, params.category).await?;
    Ok(Json(page))
}

/// `GET /api/foods/{id}`
pub async fn get_food(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Food>, ApiError> {
    food::get_food(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /api/foods`: admin-only food creation.
pub async fn create_food(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(body): Json<NewFood>,
) -> Result<(StatusCode, Json<Food>), ApiError> {
    let new_food = menu::validate_new_food(&body).map_err(ApiError::Validation)?;
    let created = food::create_food(&state.pool, &new_food, admin.user.id).await?;
    tracing::info!(food_id = %created.id, admin_id = %admin.user.id, "food created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
#[path = "foods_test.rs"]
mod tests;
