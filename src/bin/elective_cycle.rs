//! Daily cycle clock.
//!
//! Meant to be run once a day by an external scheduler. Opens the year's
//! elective cycle on February 26, closes expiring cycles on December 15 and
//! prints exactly one status line.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;

use school_admin::adapters::postgres::{self, PostgresElectiveCycleRepository};
use school_admin::application::{RunCycleClockCommand, RunCycleClockHandler};
use school_admin::config::AppConfig;
use school_admin::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(status) => {
            println!("{}", status);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init_tracing(&config.server.log_level, LogFormat::for_server(&config.server))
        .context("Failed to initialize tracing")?;

    let pool = postgres::connect(&config.database).await?;
    let handler = RunCycleClockHandler::new(Arc::new(PostgresElectiveCycleRepository::new(pool)));

    let today = Local::now().date_naive();
    let transition = handler.handle(RunCycleClockCommand { today }).await?;

    tracing::info!(%today, outcome = %transition, "Cycle clock finished");
    Ok(transition.to_string())
}
