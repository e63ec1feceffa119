//! Support chat threads: one thread per customer.
//!
//! A customer's first message gets an automatic acknowledgement from the
//! `agent` side so the thread never sits empty after the first send. Agents
//! reply out of band (directly in the database or a back-office tool).

use menu::{SupportAuthor, SupportMessage};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) const ACKNOWLEDGEMENT: &str =
    "Thanks for reaching out! A member of our team will reply here shortly.";

const MESSAGE_COLUMNS: &str =
    r#"id, author, body, to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#;

/// Whether the thread still needs the automatic acknowledgement.
pub(crate) fn needs_acknowledgement(thread: &[SupportMessage]) -> bool {
    !thread.iter().any(|m| m.author == SupportAuthor::Agent)
}

pub(crate) fn author_from_column(raw: &str) -> Result<SupportAuthor, sqlx::Error> {
    match raw {
        "customer" => Ok(SupportAuthor::Customer),
        "agent" => Ok(SupportAuthor::Agent),
        other => Err(sqlx::Error::Decode(format!("unknown support author: {other}").into())),
    }
}

fn author_column(author: SupportAuthor) -> &'static str {
    match author {
        SupportAuthor::Customer => "customer",
        SupportAuthor::Agent => "agent",
    }
}

fn row_to_message(row: &PgRow) -> Result<SupportMessage, sqlx::Error> {
    let id: Uuid = row.try_get("id")?;
    Ok(SupportMessage {
        id: id.to_string(),
        author: author_from_column(row.try_get("author")?)?,
        body: row.try_get("body")?,
        created_at: row.try_get("created_at")?,
    })
}

/// The user's thread in chronological order.
pub async fn list_messages(pool: &PgPool, user_id: Uuid) -> Result<Vec<SupportMessage>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {MESSAGE_COLUMNS} FROM support_messages WHERE user_id = $1 ORDER BY seq"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    rows.iter().map(row_to_message).collect()
}

async fn insert_message(
    pool: &PgPool,
    user_id: Uuid,
    author: SupportAuthor,
    body: &str,
) -> Result<SupportMessage, sqlx::Error> {
    let row = sqlx::query(&format!(
        "INSERT INTO support_messages (user_id, author, body) VALUES ($1, $2, $3) RETURNING {MESSAGE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(author_column(author))
    .bind(body)
    .fetch_one(pool)
    .await?;
    row_to_message(&row)
}

/// Append a customer message (already validated) and return the full thread.
pub async fn post_message(pool: &PgPool, user_id: Uuid, body: &str) -> Result<Vec<SupportMessage>, sqlx::Error> {
    let mut thread = list_messages(pool, user_id).await?;
    thread.push(insert_message(pool, user_id, SupportAuthor::Customer, body).await?);
    if needs_acknowledgement(&thread) {
        thread.push(insert_message(pool, user_id, SupportAuthor::Agent, ACKNOWLEDGEMENT).await?);
    }
    Ok(thread)
}

#[cfg(test)]
#[path = "support_test.rs"]
mod tests;
