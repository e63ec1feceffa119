mod config;
mod db;
mod error;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::time::Duration;

use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

/// Periodically delete expired sessions.
fn spawn_session_sweeper(pool: PgPool) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            match services::session::purge_expired(&pool).await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "expired sessions purged"),
                Err(e) => tracing::warn!(error = %e, "session sweep failed"),
            }
        }
    })
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if config.email.is_none() {
        tracing::warn!("RESEND_API_KEY not set; login codes will be echoed in API responses");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let _sweeper = spawn_session_sweeper(pool.clone());

    let port = config.port;
    let state = state::AppState::new(pool, config);
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "food server listening");
    axum::serve(listener, app).await.expect("server failed");
}
