//! Points every institution at the active elective cycle of the current year.
//!
//! Per-institution failures are reported and do not stop the run.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};

use school_admin::adapters::postgres::{
    self, PostgresElectiveCycleRepository, PostgresInstitutionRepository,
};
use school_admin::application::handlers::establishment::SyncInstitutionsResult;
use school_admin::application::{SyncInstitutionsCommand, SyncInstitutionsHandler};
use school_admin::config::AppConfig;
use school_admin::domain::foundation::DomainError;
use school_admin::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(result) => {
            for failure in &result.report.failures {
                eprintln!(
                    "Could not update institution ID {}: {}",
                    failure.institution_id, failure.error
                );
            }
            println!(
                "Successfully synchronized {} institutions to cycle {}.",
                result.report.updated_count(),
                result.cycle.year()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Update failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<SyncInstitutionsResult> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init_tracing(&config.server.log_level, LogFormat::for_server(&config.server))
        .context("Failed to initialize tracing")?;

    let pool = postgres::connect(&config.database).await?;
    let handler = SyncInstitutionsHandler::new(
        Arc::new(PostgresElectiveCycleRepository::new(pool.clone())),
        Arc::new(PostgresInstitutionRepository::new(pool)),
    );

    let year = Local::now().year();
    let result = handler
        .handle(SyncInstitutionsCommand { year })
        .await
        .map_err(DomainError::from)?;

    tracing::info!(
        year,
        updated = result.report.updated_count(),
        failed = result.report.failed_count(),
        "Institution sync finished"
    );
    Ok(result)
}
