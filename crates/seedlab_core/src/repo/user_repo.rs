//! `users` collection operations.

use super::{RepoResult, UpdateSummary};
use crate::model::{Department, User};
use crate::query::users;
use futures::TryStreamExt;
use mongodb::bson::Document;
use mongodb::Collection;

/// MongoDB-backed user repository.
pub struct UserRepository<'c> {
    collection: &'c Collection<User>,
}

impl<'c> UserRepository<'c> {
    pub fn new(collection: &'c Collection<User>) -> Self {
        Self { collection }
    }

    /// Inserts `users` in one batch and returns the inserted count.
    pub async fn insert_many(&self, users: &[User]) -> RepoResult<usize> {
        let result = self.collection.insert_many(users).await?;
        Ok(result.inserted_ids.len())
    }

    /// Deletes the first user of `department`; returns 0 or 1.
    pub async fn delete_one_in_department(&self, department: Department) -> RepoResult<u64> {
        let result = self
            .collection
            .delete_one(users::by_department(department))
            .await?;
        Ok(result.deleted_count)
    }

    /// Sets the same `first_name` on every user of `department`.
    pub async fn rename_department(
        &self,
        department: Department,
        first_name: &str,
    ) -> RepoResult<UpdateSummary> {
        let result = self
            .collection
            .update_many(
                users::by_department(department),
                users::set_first_name(first_name),
            )
            .await?;
        Ok(result.into())
    }

    pub async fn find_in_department(&self, department: Department) -> RepoResult<Vec<User>> {
        let cursor = self
            .collection
            .find(users::by_department(department))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        Ok(self.collection.count_documents(Document::new()).await?)
    }
}
