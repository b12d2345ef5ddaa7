//! Collection reset for a fresh showcase run.
//!
//! # Invariants
//! - After `reset_collections` returns, all three collections exist and are
//!   empty.
//! - Dropping a collection that does not exist is treated as success.

use super::DbResult;
use crate::model::{Article, Student, User};
use log::{debug, info};
use mongodb::bson::Document;
use mongodb::error::ErrorKind;
use mongodb::{Collection, Database};

pub const USERS: &str = "users";
pub const ARTICLES: &str = "articles";
pub const STUDENTS: &str = "students";

const NAMESPACE_NOT_FOUND: i32 = 26;

/// Typed handles for the three showcase collections.
///
/// Built once per run and passed by reference to whoever needs them.
#[derive(Debug, Clone)]
pub struct Collections {
    pub users: Collection<User>,
    pub articles: Collection<Article>,
    pub students: Collection<Student>,
}

impl Collections {
    /// Typed handles on `database` without touching the server.
    pub fn open(database: &Database) -> Self {
        Self {
            users: database.collection(USERS),
            articles: database.collection(ARTICLES),
            students: database.collection(STUDENTS),
        }
    }
}

/// Drops and recreates `users`, `articles` and `students`.
///
/// # Errors
/// - Any driver error other than "namespace not found" on drop is returned
///   unchanged.
pub async fn reset_collections(database: &Database) -> DbResult<Collections> {
    for name in [USERS, ARTICLES, STUDENTS] {
        reset_collection(database, name).await?;
    }

    info!(
        "event=collections_reset module=db status=ok database={} collections={},{},{}",
        database.name(),
        USERS,
        ARTICLES,
        STUDENTS
    );

    Ok(Collections::open(database))
}

async fn reset_collection(database: &Database, name: &str) -> DbResult<()> {
    if let Err(err) = database.collection::<Document>(name).drop().await {
        if !is_namespace_not_found(&err) {
            return Err(err.into());
        }
        debug!("event=collection_drop module=db status=skipped collection={name} reason=missing");
    }

    database.create_collection(name).await?;
    debug!("event=collection_create module=db status=ok collection={name}");

    Ok(())
}

fn is_namespace_not_found(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Command(command) if command.code == NAMESPACE_NOT_FOUND
    )
}
