//! `seedlab` entry point.
//!
//! # Responsibility
//! - Read configuration from the environment and start logging.
//! - Run the showcase once and exit non-zero only on a fatal error.

use log::{error, info, warn};
use seedlab_core::{flush_logging, init_logging, AppConfig, AppError};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let code = match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Logging(message)) => {
            // Logger never came up, so stderr is the only channel left.
            eprintln!("seedlab: {message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("event=exit module=cli status=error error={err}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

async fn run() -> Result<(), AppError> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_logging(seedlab_core::default_log_level(), None).map_err(AppError::Logging)?;
            return Err(err.into());
        }
    };
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(AppError::Logging)?;

    let report = seedlab_core::run(&config).await?;
    if report.failed() > 0 {
        warn!(
            "event=exit module=cli status=partial failed={} succeeded={}",
            report.failed(),
            report.succeeded()
        );
    } else {
        info!(
            "event=exit module=cli status=ok examples={}",
            report.succeeded()
        );
    }
    Ok(())
}
