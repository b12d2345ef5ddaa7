//! One complete showcase run.
//!
//! # Responsibility
//! - Load the dataset, connect, reset collections, run the examples, close.
//!
//! # Invariants
//! - Dataset, connect and reset failures are fatal and returned.
//! - Example failures are never returned; they only show in the report.
//! - The connection is closed whenever it was opened.

use crate::config::{redact_uri, AppConfig, ConfigError};
use crate::db::{reset_collections, Connection, DbError};
use crate::fixtures::{self, seeded_rng, DatasetError};
use crate::service::{RunReport, Showcase};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

/// Fatal error that ends a run.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Logging(String),
    Dataset(DatasetError),
    Db(DbError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Logging(message) => write!(f, "logging error: {message}"),
            Self::Dataset(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "database error: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Dataset(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Runs the full showcase once against `config`.
///
/// # Errors
/// - `AppError::Dataset` when the bundled dataset is malformed.
/// - `AppError::Db` when connecting or resetting collections fails.
pub async fn run(config: &AppConfig) -> AppResult<RunReport> {
    let students = fixtures::students()?;
    info!(
        "event=run module=app status=start uri={} database={} students={} seeded={}",
        redact_uri(&config.mongodb_uri),
        config.database,
        students.len(),
        config.seed.is_some()
    );

    let connection = Connection::connect(&config.mongodb_uri, &config.database).await?;

    let collections = match reset_collections(connection.database()).await {
        Ok(collections) => collections,
        Err(err) => {
            error!("event=run module=app status=error stage=reset error={err}");
            connection.close().await;
            return Err(err.into());
        }
    };

    let report = Showcase::new(&collections, students, seeded_rng(config.seed))
        .run_all()
        .await;

    connection.close().await;
    info!(
        "event=run module=app status=ok succeeded={} failed={}",
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}
