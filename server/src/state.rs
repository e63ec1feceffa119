//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the parsed configuration and the login-code rate
//! limiter. Clone is required by Axum; every field is cheap to clone.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// Throttles `request-code` per email address.
    pub login_codes: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: Config) -> Self {
        let login_codes = RateLimiter::new(config.login_code_limit, config.login_code_window);
        Self { pool, config: Arc::new(config), login_codes }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_wires_rate_limiter_from_config() {
        let state = test_helpers::test_app_state();
        assert!(state.login_codes.check_and_record("a@example.com").is_ok());
        assert!(state.login_codes.check_and_record("a@example.com").is_ok());
        assert!(state.login_codes.check_and_record("a@example.com").is_err());
    }

    #[tokio::test]
    async fn state_clone_shares_config() {
        let state = test_helpers::test_app_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert!(cloned.config.is_admin_email("chef@example.com"));
    }
}
