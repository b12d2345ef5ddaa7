//! Connection bootstrap utilities for MongoDB.
//!
//! # Responsibility
//! - Parse the connection string and build the driver client.
//! - Verify the server answers `ping` and is new enough for `$merge`.
//! - Release the client when the run is over.
//!
//! # Invariants
//! - A returned `Connection` has answered `ping`.
//! - The database handle cannot outlive `close()` because `close` consumes
//!   the connection.

use super::{DbError, DbResult};
use log::{error, info, warn};
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Instant;

/// `$merge` into the collection being aggregated needs 4.4.
pub const MINIMUM_SERVER_VERSION: &str = "4.4";

const APP_NAME: &str = "seedlab";

/// Active MongoDB session scoped to one database.
pub struct Connection {
    client: Client,
    database: Database,
}

impl Connection {
    /// Connects to `uri`, pings the server and checks its version.
    ///
    /// # Side effects
    /// - Network I/O against the configured deployment.
    /// - Emits `db_connect` logging events with duration and status.
    ///
    /// # Errors
    /// - Returns `DbError::Mongo` when the URI is invalid or the server is
    ///   unreachable.
    /// - Returns `DbError::UnsupportedServerVersion` for servers older than
    ///   [`MINIMUM_SERVER_VERSION`].
    pub async fn connect(uri: &str, database_name: &str) -> DbResult<Self> {
        let started_at = Instant::now();
        info!("event=db_connect module=db status=start database={database_name}");

        match Self::open(uri, database_name).await {
            Ok(connection) => {
                info!(
                    "event=db_connect module=db status=ok database={} duration_ms={}",
                    database_name,
                    started_at.elapsed().as_millis()
                );
                Ok(connection)
            }
            Err(err) => {
                error!(
                    "event=db_connect module=db status=error database={} duration_ms={} error={}",
                    database_name,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Returns the active database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Shuts the client down and waits for in-flight operations to finish.
    pub async fn close(self) {
        let started_at = Instant::now();
        info!("event=db_close module=db status=start");
        self.client.shutdown().await;
        info!(
            "event=db_close module=db status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
    }

    async fn open(uri: &str, database_name: &str) -> DbResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(database_name);
        database.run_command(doc! { "ping": 1 }).await?;

        let build_info = database.run_command(doc! { "buildInfo": 1 }).await?;
        ensure_supported_version(&build_info)?;

        Ok(Self { client, database })
    }
}

fn ensure_supported_version(build_info: &Document) -> DbResult<()> {
    let Ok(server_version) = build_info.get_str("version") else {
        warn!("event=db_connect module=db status=warn reason=missing_build_version");
        return Ok(());
    };

    let minimum = parse_major_minor(MINIMUM_SERVER_VERSION);
    match (parse_major_minor(server_version), minimum) {
        (Some(actual), Some(required)) if actual < required => {
            Err(DbError::UnsupportedServerVersion {
                server_version: server_version.to_string(),
                minimum: MINIMUM_SERVER_VERSION,
            })
        }
        (None, _) => {
            warn!(
                "event=db_connect module=db status=warn reason=unparsable_build_version version={server_version}"
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Parses the `major.minor` prefix of a server version string.
///
/// Returns `None` when either component is missing or not numeric.
pub fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts
        .next()?
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()?;
    Some((major, minor))
}
