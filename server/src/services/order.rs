//! Order placement and history.
//!
//! DESIGN
//! ======
//! Prices are copied onto `order_items` at placement so later menu edits do
//! not rewrite history. The order row and its lines are written in one
//! transaction.

use std::collections::HashMap;

use menu::{FieldError, Food, Order, OrderItemRequest, OrderLine, OrderStatus};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::food;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("invalid order")]
    Invalid(Vec<FieldError>),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Parse the (already merged) request lines into food UUIDs.
pub(crate) fn parse_food_ids(items: &[OrderItemRequest]) -> Result<Vec<Uuid>, Vec<FieldError>> {
    let mut ids = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for item in items {
        match Uuid::parse_str(&item.food_id) {
            Ok(id) => ids.push(id),
            Err(_) => errors.push(FieldError::new("items", format!("Unknown food: {}", item.food_id))),
        }
    }
    if errors.is_empty() { Ok(ids) } else { Err(errors) }
}

/// Price request lines against the current menu.
///
/// Every requested food must be present in `foods` (i.e. exist and be
/// available); missing ones are reported individually.
pub(crate) fn price_order(items: &[OrderItemRequest], foods: &[Food]) -> Result<(Vec<OrderLine>, i64), Vec<FieldError>> {
    let by_id: HashMap<&str, &Food> = foods.iter().map(|f| (f.id.as_str(), f)).collect();
    let mut lines = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    let mut total: i64 = 0;

    for item in items {
        let Some(food) = by_id.get(item.food_id.as_str()) else {
            errors.push(FieldError::new("items", format!("{} is not on the menu right now.", item.food_id)));
            continue;
        };
        total += food.price_cents * i64::from(item.quantity);
        lines.push(OrderLine {
            food_id: food.id.clone(),
            name: food.name.clone(),
            quantity: item.quantity,
            unit_price_cents: food.price_cents,
        });
    }

    if errors.is_empty() { Ok((lines, total)) } else { Err(errors) }
}

/// Place an order for `user_id`. `items` must come from `menu::normalize_order`.
pub async fn create_order(pool: &PgPool, user_id: Uuid, items: &[OrderItemRequest]) -> Result<Order, OrderError> {
    let ids = parse_food_ids(items).map_err(OrderError::Invalid)?;
    let foods = food::fetch_available(pool, &ids).await?;
    let (lines, total_cents) = price_order(items, &foods).map_err(OrderError::Invalid)?;

    let mut tx = pool.begin().await?;
    let row = sqlx::query(
        r#"INSERT INTO orders (user_id, status, total_cents)
           VALUES ($1, 'placed', $2)
           RETURNING id, to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#,
    )
    .bind(user_id)
    .bind(total_cents)
    .fetch_one(&mut *tx)
    .await?;
    let order_id: Uuid = row.get("id");

    for (line, id) in lines.iter().zip(&ids) {
        sqlx::query(
            "INSERT INTO order_items (order_id, food_id, name, quantity, unit_price_cents)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(order_id)
        .bind(id)
        .bind(&line.name)
        .bind(i32::try_from(line.quantity).unwrap_or(i32::MAX))
        .bind(line.unit_price_cents)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(%order_id, %user_id, total_cents, "order placed");
    Ok(Order {
        id: order_id.to_string(),
        status: OrderStatus::Placed,
        total_cents,
        created_at: row.get("created_at"),
        items: lines,
    })
}

/// Flat row of the order-history join.
#[derive(Debug, Clone)]
pub(crate) struct OrderRow {
    pub order_id: String,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub created_at: String,
    pub line: OrderLine,
}

/// Fold join rows (ordered by order) into orders, keeping first-seen order.
pub(crate) fn group_order_rows(rows: Vec<OrderRow>) -> Vec<Order> {
    let mut orders: Vec<Order> = Vec::new();
    for row in rows {
        match orders.last_mut() {
            Some(order) if order.id == row.order_id => order.items.push(row.line),
            _ => orders.push(Order {
                id: row.order_id,
                status: row.status,
                total_cents: row.total_cents,
                created_at: row.created_at,
                items: vec![row.line],
            }),
        }
    }
    orders
}

/// Orders placed by `user_id`, newest first.
pub async fn list_orders(pool: &PgPool, user_id: Uuid) -> Result<Vec<Order>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT o.id, o.status, o.total_cents,
                  to_char(o.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  i.food_id, i.name, i.quantity, i.unit_price_cents
           FROM orders o
           JOIN order_items i ON i.order_id = o.id
           WHERE o.user_id = $1
           ORDER BY o.created_at DESC, o.id, i.name"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut flat = Vec::with_capacity(rows.len());
    for row in rows {
        let order_id: Uuid = row.try_get("id")?;
        let food_id: Uuid = row.try_get("food_id")?;
        let status: String = row.try_get("status")?;
        let quantity: i32 = row.try_get("quantity")?;
        flat.push(OrderRow {
            order_id: order_id.to_string(),
            status: status
                .parse()
                .map_err(|e: String| sqlx::Error::Decode(e.into()))?,
            total_cents: row.try_get("total_cents")?,
            created_at: row.try_get("created_at")?,
            line: OrderLine {
                food_id: food_id.to_string(),
                name: row.try_get("name")?,
                quantity: u32::try_from(quantity).unwrap_or(0),
                unit_price_cents: row.try_get("unit_price_cents")?,
            },
        });
    }
    Ok(group_order_rows(flat))
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
