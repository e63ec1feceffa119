//! Process configuration loaded from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (via `dotenvy`) and then calls [`Config::from_env`]
//! once at startup. Everything downstream receives the parsed struct through
//! `AppState` instead of reading the environment itself.

use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOGIN_CODE_LIMIT: usize = 5;
const DEFAULT_LOGIN_CODE_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Outbound email settings. Absent when `RESEND_API_KEY` is unset, in which
/// case login codes are echoed back to the caller for local development.
#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub api_key: String,
    pub from: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    /// Lowercased addresses promoted to the `admin` role on sign-in.
    pub admin_emails: Vec<String>,
    pub email: Option<EmailConfig>,
    pub login_code_limit: usize,
    pub login_code_window: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let email = match get("RESEND_API_KEY").filter(|v| !v.trim().is_empty()) {
            Some(api_key) => Some(EmailConfig {
                api_key,
                from: get("RESEND_FROM").ok_or(ConfigError::Missing("RESEND_FROM"))?,
            }),
            None => None,
        };

        Ok(Self {
            database_url,
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            db_max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            cookie_secure: match get("COOKIE_SECURE") {
                Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
                None => false,
            },
            admin_emails: get("ADMIN_EMAILS")
                .map(|raw| parse_email_list(&raw))
                .unwrap_or_default(),
            email,
            login_code_limit: parse_or(&get, "LOGIN_CODE_RATE_LIMIT", DEFAULT_LOGIN_CODE_LIMIT)?,
            login_code_window: Duration::from_secs(parse_or(
                &get,
                "LOGIN_CODE_RATE_WINDOW_SECS",
                DEFAULT_LOGIN_CODE_WINDOW_SECS,
            )?),
        })
    }

    #[must_use]
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_ascii_lowercase();
        self.admin_emails.iter().any(|a| *a == email)
    }
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
