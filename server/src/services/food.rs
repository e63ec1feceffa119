//! Menu catalog queries.
//!
//! Foods are read by everyone and written only by admins; the route layer
//! enforces that, this module only talks to Postgres.

use menu::{Food, FoodCategory, FoodPage, NewFood};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const FOOD_COLUMNS: &str = "id, name, description, category, price_cents, image_url, available";

/// Select from foods customers may see; hidden foods behave as missing.
pub(crate) fn available_foods_where(predicate: &str) -> String {
    format!("SELECT {FOOD_COLUMNS} FROM foods WHERE available AND {predicate}")
}

/// Row offset for a 1-based page.
#[must_use]
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    i64::from(page.max(1) - 1) * i64::from(per_page)
}

pub(crate) fn row_to_food(row: &PgRow) -> Result<Food, sqlx::Error> {
    let id: Uuid = row.try_get("id")?;
    let category: String = row.try_get("category")?;
    let category = category
        .parse::<FoodCategory>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(Food {
        id: id.to_string(),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        category,
        price_cents: row.try_get("price_cents")?,
        image_url: row.try_get("image_url")?,
        available: row.try_get("available")?,
    })
}

/// One page of available foods, optionally filtered by category.
pub async fn list_foods(
    pool: &PgPool,
    page: u32,
    per_page: u32,
    category: Option<FoodCategory>,
) -> Result<FoodPage, sqlx::Error> {
    let category = category.map(FoodCategory::as_str);

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM foods WHERE available AND ($1::text IS NULL OR category = $1)",
    )
    .bind(category)
    .fetch_one(pool)
    .await?;

    let rows = sqlx::query(&format!(
        "SELECT {FOOD_COLUMNS} FROM foods
         WHERE available AND ($1::text IS NULL OR category = $1)
         ORDER BY category, name, id
         LIMIT $2 OFFSET $3"
    ))
    .bind(category)
    .bind(i64::from(per_page))
    .bind(page_offset(page, per_page))
    .fetch_all(pool)
    .await?;

    let items = rows.iter().map(row_to_food).collect::<Result<Vec<_>, _>>()?;
    Ok(FoodPage { items, page: page.max(1), per_page, total: u64::try_from(total).unwrap_or(0) })
}

/// A single available food. Unavailable foods are reported as missing.
pub async fn get_food(pool: &PgPool, id: Uuid) -> Result<Option<Food>, sqlx::Error> {
    let row = sqlx::query(&available_foods_where("id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(row_to_food).transpose()
}

/// Insert an already-validated food.
pub async fn create_food(pool: &PgPool, food: &NewFood, created_by: Uuid) -> Result<Food, sqlx::Error> {
    let row = sqlx::query(&format!(
        "INSERT INTO foods (name, description, category, price_cents, image_url, created_by)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {FOOD_COLUMNS}"
    ))
    .bind(&food.name)
    .bind(&food.description)
    .bind(food.category.as_str())
    .bind(food.price_cents)
    .bind(food.image_url.as_deref())
    .bind(created_by)
    .fetch_one(pool)
    .await?;
    row_to_food(&row)
}

/// Available foods among `ids`.
pub async fn fetch_available(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Food>, sqlx::Error> {
    let rows = sqlx::query(&available_foods_where("id = ANY($1)"))
        .bind(ids)
        .fetch_all(pool)
        .await?;
    rows.iter().map(row_to_food).collect()
}

#[cfg(test)]
#[path = "food_test.rs"]
mod tests;
