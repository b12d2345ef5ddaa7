//! Repository layer over the showcase collections.
//!
//! # Responsibility
//! - Expose one operation per query the showcase runs.
//! - Keep driver calls and cursor handling out of the showcase itself.
//!
//! # Invariants
//! - Repositories borrow collection handles; they never create or drop
//!   collections.
//! - Aggregation rows that fail to decode surface as `RepoError::Decode`
//!   instead of being skipped.

pub mod article_repo;
pub mod student_repo;
pub mod user_repo;

use crate::db::DbError;
use futures::TryStreamExt;
use mongodb::bson::{self, Document};
use mongodb::results::UpdateResult;
use mongodb::Collection;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use article_repo::ArticleRepository;
pub use student_repo::StudentRepository;
pub use user_repo::UserRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for showcase reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Decode(bson::de::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "failed to decode result row: {err}"),
            Self::InvalidData(message) => write!(f, "unexpected query result: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<mongodb::error::Error> for RepoError {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Db(DbError::Mongo(value))
    }
}

impl From<bson::de::Error> for RepoError {
    fn from(value: bson::de::Error) -> Self {
        Self::Decode(value)
    }
}

/// Matched/modified counts of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateSummary {
    pub matched: u64,
    pub modified: u64,
}

impl From<UpdateResult> for UpdateSummary {
    fn from(value: UpdateResult) -> Self {
        Self {
            matched: value.matched_count,
            modified: value.modified_count,
        }
    }
}

/// Runs `pipeline` and decodes every row as `T`.
async fn aggregate_rows<C, T>(collection: &Collection<C>, pipeline: Vec<Document>) -> RepoResult<Vec<T>>
where
    C: Send + Sync,
    T: DeserializeOwned,
{
    let cursor = collection.aggregate(pipeline).await?;
    let documents: Vec<Document> = cursor.try_collect().await?;
    decode_rows(documents)
}

fn decode_rows<T: DeserializeOwned>(documents: Vec<Document>) -> RepoResult<Vec<T>> {
    documents
        .into_iter()
        .map(|document| bson::from_document(document).map_err(RepoError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_rows, RepoError};
    use crate::model::HomeworkAverageRow;
    use mongodb::bson::doc;

    #[test]
    fn decode_rows_maps_documents_in_order() {
        let rows: Vec<HomeworkAverageRow> =
            decode_rows(vec![doc! { "_id": null, "average": 51.5 }]).unwrap();
        assert_eq!(rows, vec![HomeworkAverageRow { average: 51.5 }]);
    }

    #[test]
    fn decode_rows_rejects_malformed_rows() {
        let err = decode_rows::<HomeworkAverageRow>(vec![doc! { "average": "high" }]).unwrap_err();
        assert!(matches!(err, RepoError::Decode(_)));
    }
}
