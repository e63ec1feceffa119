//! Order routes for signed-in customers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use menu::{Order, OrderRequest};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::services::order::{self, OrderError};
use crate::state::AppState;

pub(crate) fn order_error(err: OrderError) -> ApiError {
    match err {
        OrderError::Invalid(fields) => ApiError::Validation(fields),
        OrderError::Db(e) => ApiError::Db(e),
    }
}

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<OrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let items = menu::normalize_order(&body).map_err(ApiError::Validation)?;
    let placed = order::create_order(&state.pool, auth.user.id, &items)
        .await
        .map_err(order_error)?;
    Ok((StatusCode::CREATED, Json(placed)))
}

/// `GET /api/orders`: caller's orders, newest first.
pub async fn list_orders(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(order::list_orders(&state.pool, auth.user.id).await?))
}

#[cfg(test)]
mod tests {
    use menu::FieldError;

    use super::*;

    #[test]
    fn order_error_invalid_maps_to_422() {
        let err = order_error(OrderError::Invalid(vec![FieldError::new("items", "gone")]));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn order_error_db_maps_to_500() {
        let err = order_error(OrderError::Db(sqlx::Error::PoolClosed));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
