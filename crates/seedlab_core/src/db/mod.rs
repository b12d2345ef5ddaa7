//! MongoDB session bootstrap and collection reset entry points.
//!
//! # Responsibility
//! - Open, verify and close the single MongoDB session used by a run.
//! - Recreate the `users`, `articles` and `students` collections.
//!
//! # Invariants
//! - Exactly one session is opened per run; there is no retry.
//! - Collections are always dropped and recreated, never seeded incrementally.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod collections;
mod connection;

pub use collections::{reset_collections, Collections, ARTICLES, STUDENTS, USERS};
pub use connection::{parse_major_minor, Connection, MINIMUM_SERVER_VERSION};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Mongo(mongodb::error::Error),
    UnsupportedServerVersion {
        server_version: String,
        minimum: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mongo(err) => write!(f, "{err}"),
            Self::UnsupportedServerVersion {
                server_version,
                minimum,
            } => write!(
                f,
                "mongodb server version {server_version} is older than required {minimum}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mongo(err) => Some(err),
            Self::UnsupportedServerVersion { .. } => None,
        }
    }
}

impl From<mongodb::error::Error> for DbError {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Mongo(value)
    }
}
