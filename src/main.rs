//! School Admin HTTP server.

use std::sync::Arc;

use anyhow::{Context, Result};

use school_admin::adapters::http::{self, SchoolAppState};
use school_admin::adapters::postgres::{
    self, PostgresElectiveCycleRepository, PostgresInstitutionRepository,
};
use school_admin::config::AppConfig;
use school_admin::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init_tracing(&config.server.log_level, LogFormat::for_server(&config.server))
        .context("Failed to initialize tracing")?;

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
    }

    let state = SchoolAppState::new(
        Arc::new(PostgresElectiveCycleRepository::new(pool.clone())),
        Arc::new(PostgresInstitutionRepository::new(pool)),
    );
    let app = http::application(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, environment = ?config.server.environment, "School admin API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
