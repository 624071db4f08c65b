//! Elimination Tracker server binary.
//!
//! Loads configuration, connects to PostgreSQL and serves the HTTP API.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use elimination_tracker::adapters::http::{app_router, SessionHandlers};
use elimination_tracker::adapters::postgres::{
    PostgresParticipantRepository, PostgresSeasonRepository, PostgresSessionRepository,
    PostgresVoteReader,
};
use elimination_tracker::application::TransitionSessionStatusHandler;
use elimination_tracker::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Connected to PostgreSQL"
    );

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let transition_handler = Arc::new(TransitionSessionStatusHandler::new(
        Arc::new(PostgresSessionRepository::new(pool.clone())),
        Arc::new(PostgresParticipantRepository::new(pool.clone())),
        Arc::new(PostgresVoteReader::new(pool.clone())),
        Arc::new(PostgresSeasonRepository::new(pool.clone())),
    ));
    let app = app_router(SessionHandlers::new(transition_handler), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))?;
    let subscriber = fmt().with_env_filter(env_filter);

    if server.is_production() {
        subscriber.json().try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}
