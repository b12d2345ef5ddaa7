//! `articles` collection operations.

use super::{RepoResult, UpdateSummary};
use crate::model::{Article, ArticleType};
use crate::query::articles;
use futures::TryStreamExt;
use mongodb::Collection;

/// MongoDB-backed article repository.
pub struct ArticleRepository<'c> {
    collection: &'c Collection<Article>,
}

impl<'c> ArticleRepository<'c> {
    pub fn new(collection: &'c Collection<Article>) -> Self {
        Self { collection }
    }

    /// Inserts `articles` in one batch and returns the inserted count.
    pub async fn insert_many(&self, articles: &[Article]) -> RepoResult<usize> {
        let result = self.collection.insert_many(articles).await?;
        Ok(result.inserted_ids.len())
    }

    /// Overwrites the tag list of every article of `kind`.
    pub async fn replace_tags_for_type(
        &self,
        kind: ArticleType,
        tags: &[&str],
    ) -> RepoResult<UpdateSummary> {
        let result = self
            .collection
            .update_many(articles::by_type(kind), articles::set_tags(tags))
            .await?;
        Ok(result.into())
    }

    /// Overwrites the tag list of every article not of `kind`.
    pub async fn replace_tags_except_type(
        &self,
        kind: ArticleType,
        tags: &[&str],
    ) -> RepoResult<UpdateSummary> {
        let result = self
            .collection
            .update_many(articles::excluding_type(kind), articles::set_tags(tags))
            .await?;
        Ok(result.into())
    }

    /// Articles carrying at least one of `tags`.
    pub async fn find_with_any_tag(&self, tags: &[&str]) -> RepoResult<Vec<Article>> {
        let cursor = self.collection.find(articles::tags_any_of(tags)).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Removes `tags` from every article.
    pub async fn pull_tags_everywhere(&self, tags: &[&str]) -> RepoResult<UpdateSummary> {
        let result = self
            .collection
            .update_many(articles::all(), articles::pull_tags(tags))
            .await?;
        Ok(result.into())
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Article>> {
        let cursor = self.collection.find(articles::all()).await?;
        Ok(cursor.try_collect().await?)
    }
}
