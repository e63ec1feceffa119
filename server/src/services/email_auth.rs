//! Email sign-in codes.
//!
//! A code is six characters from an alphabet without look-alikes (no `0`/`O`,
//! `1`/`I`). Only its SHA-256 is stored. An email has at most one live code;
//! asking again retires the previous one. Five wrong guesses burn a code.

use rand::Rng;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::bytes_to_hex;

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_TTL_MINUTES: i32 = 10;
const MAX_FAILED_ATTEMPTS: i32 = 5;
const CODE_EMAIL_SUBJECT: &str = "Your Forkful sign-in code";
const EMAIL_AUTH_TEMPLATE: &str = include_str!("../../templates/email_auth.html");

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    let well_formed = normalized.len() == CODE_LEN && normalized.bytes().all(|b| CODE_ALPHABET.contains(&b));
    well_formed.then_some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    std::iter::repeat_with(|| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .take(CODE_LEN)
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    bytes_to_hex(&Sha256::digest(code.as_bytes()))
}

/// Initial display name for a new account: the local part of the email.
fn display_name(email: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) if !local.trim().is_empty() => local.to_owned(),
        _ => "guest".to_owned(),
    }
}

/// Effect of one submitted code on the live code it is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CodeCheck {
    Accepted,
    /// Wrong code. `burned` once this guess reaches the attempt cap.
    Rejected { burned: bool },
}

/// Compare a normalized submission with the stored hash of a live code that
/// has already seen `attempts` wrong guesses.
pub(crate) fn check_code(stored_hash: &str, attempts: i32, submitted: &str) -> CodeCheck {
    if hash_access_code(submitted) == stored_hash {
        CodeCheck::Accepted
    } else {
        CodeCheck::Rejected { burned: attempts.saturating_add(1) >= MAX_FAILED_ATTEMPTS }
    }
}

/// Ensure a user exists for `email` and issue a fresh code for it.
pub async fn request_access_code(pool: &PgPool, email: &str) -> Result<String, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let code = generate_access_code();

    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO users (email, name) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING")
        .bind(&email)
        .bind(display_name(&email))
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE email_login_codes SET consumed_at = now() WHERE email = $1 AND consumed_at IS NULL")
        .bind(&email)
        .execute(&mut *tx)
        .await?;
    sqlx::query(
        "INSERT INTO email_login_codes (email, code_hash, expires_at)
         VALUES ($1, $2, now() + make_interval(mins => $3))",
    )
    .bind(&email)
    .bind(hash_access_code(&code))
    .bind(CODE_TTL_MINUTES)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(code)
}

/// Check `code` against the live code for `email` and return the user id.
///
/// With `promote_admin` the account is raised to `admin` in the same
/// transaction that consumes the code.
pub async fn verify_access_code(
    pool: &PgPool,
    email: &str,
    code: &str,
    promote_admin: bool,
) -> Result<Uuid, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let code = normalize_code(code).ok_or(EmailAuthError::InvalidCode)?;

    let mut tx = pool.begin().await?;
    let live = sqlx::query(
        "SELECT id, code_hash, attempts FROM email_login_codes
         WHERE email = $1 AND consumed_at IS NULL AND expires_at > now()
         ORDER BY created_at DESC
         LIMIT 1
         FOR UPDATE",
    )
    .bind(&email)
    .fetch_optional(&mut *tx)
    .await?;
    let Some(live) = live else {
        return Err(EmailAuthError::VerificationFailed);
    };
    let code_id: Uuid = live.try_get("id")?;
    let stored_hash: String = live.try_get("code_hash")?;
    let attempts: i32 = live.try_get("attempts")?;

    match check_code(&stored_hash, attempts, &code) {
        CodeCheck::Rejected { burned } => {
            sqlx::query(
                "UPDATE email_login_codes
                 SET attempts = attempts + 1, consumed_at = CASE WHEN $2 THEN now() END
                 WHERE id = $1",
            )
            .bind(code_id)
            .bind(burned)
            .execute(&mut *tx)
            .await?;
            tx.commit().await?;
            if burned {
                tracing::info!(%email, "login code burned after repeated failures");
            }
            Err(EmailAuthError::VerificationFailed)
        }
        CodeCheck::Accepted => {
            sqlx::query("UPDATE email_login_codes SET consumed_at = now() WHERE id = $1")
                .bind(code_id)
                .execute(&mut *tx)
                .await?;
            let user_id: Option<Uuid> = sqlx::query_scalar(
                "UPDATE users SET role = CASE WHEN $2 THEN 'admin' ELSE role END
                 WHERE email = $1
                 RETURNING id",
            )
            .bind(&email)
            .bind(promote_admin)
            .fetch_optional(&mut *tx)
            .await?;
            let user_id = user_id.ok_or(EmailAuthError::VerificationFailed)?;
            tx.commit().await?;
            Ok(user_id)
        }
    }
}

pub async fn send_access_code_email(
    resend_api_key: &str,
    resend_from: &str,
    to_email: &str,
    code: &str,
) -> Result<(), EmailAuthError> {
    let message = CreateEmailBaseOptions::new(resend_from, [to_email], CODE_EMAIL_SUBJECT)
        .with_html(&render_email_auth_template(to_email, code));
    Resend::new(resend_api_key)
        .emails
        .send(message)
        .await
        .map(|_| ())
        .map_err(|e| EmailAuthError::EmailDelivery(e.to_string()))
}

#[must_use]
pub fn render_email_auth_template(email: &str, code: &str) -> String {
    EMAIL_AUTH_TEMPLATE.replace("{{EMAIL}}", email).replace("{{CODE}}", code)
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
