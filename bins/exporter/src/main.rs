//! Workshop exporter
//!
//! Loads the holding fixture, logs a summary of it and writes the
//! pipe-delimited account export.
//!
//! Usage: cargo run --bin workshop

use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use workshop_core::Workshop;
use workshop_shared::config::LoggingConfig;
use workshop_shared::{AppConfig, AppError, AppResult};

/// Number of users drawn for the sample log line.
const SAMPLE_SIZE: usize = 3;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{}: {err}", err.error_code());
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn run(config: &AppConfig) -> AppResult<()> {
    let workshop = Workshop::new();

    info!(
        holdings = workshop.holdings_with_companies_count(),
        companies = workshop.total_companies(),
        employees = workshop.total_employees(),
        accounts = workshop.accounts_count(),
        currencies = %workshop.currencies_joined(),
        "Dataset loaded"
    );

    let total = Workshop::sum_to_pln(workshop.accounts())?;
    let dominant = workshop.most_popular_account_type()?;
    info!(total_pln = %total, dominant_account_type = %dominant, "Balances aggregated");

    let sample = match config.sampling.seed {
        Some(seed) => workshop.random_users_with(SAMPLE_SIZE, &mut StdRng::seed_from_u64(seed)),
        None => workshop.random_users(SAMPLE_SIZE),
    }?;
    let names: Vec<String> = sample.iter().map(|u| u.full_name()).collect();
    info!(users = ?names, "Random sample drawn");

    let rows = workshop
        .export_accounts(&config.export.path)
        .map_err(AppError::from)?;
    info!(rows, path = %config.export.path.display(), "Export complete");

    Ok(())
}
