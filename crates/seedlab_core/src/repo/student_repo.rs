//! `students` collection operations.
//!
//! # Invariants
//! - Read pipelines never write; only `mark_failing_homework` merges back.
//! - `delete_marked` is the only path that removes students.

use super::{aggregate_rows, RepoError, RepoResult};
use crate::model::{
    AverageGroupRow, HomeworkAverageRow, QuizExamSumRow, QuizHomeworkRow, Student,
    StudentScoreRow,
};
use crate::query::students;
use futures::TryStreamExt;
use mongodb::bson::Document;
use mongodb::Collection;

/// MongoDB-backed student repository.
pub struct StudentRepository<'c> {
    collection: &'c Collection<Student>,
}

impl<'c> StudentRepository<'c> {
    pub fn new(collection: &'c Collection<Student>) -> Self {
        Self { collection }
    }

    /// Imports `students` unchanged, keeping their dataset `_id`s.
    pub async fn insert_many(&self, students: &[Student]) -> RepoResult<usize> {
        let result = self.collection.insert_many(students).await?;
        Ok(result.inserted_ids.len())
    }

    pub async fn lowest_homework_scores(&self, limit: i64) -> RepoResult<Vec<StudentScoreRow>> {
        aggregate_rows(self.collection, students::lowest_homework_scores(limit)).await
    }

    pub async fn quiz_homework_rank(&self, limit: i64) -> RepoResult<Vec<QuizHomeworkRow>> {
        aggregate_rows(self.collection, students::quiz_homework_rank(limit)).await
    }

    pub async fn top_quiz_exam_sum(&self, limit: i64) -> RepoResult<Vec<QuizExamSumRow>> {
        aggregate_rows(self.collection, students::top_quiz_exam_sum(limit)).await
    }

    /// Mean homework score, or `None` when there are no homework scores.
    ///
    /// # Errors
    /// - Returns `RepoError::InvalidData` if the pipeline yields more than one
    ///   row.
    pub async fn homework_average(&self) -> RepoResult<Option<f64>> {
        let rows: Vec<HomeworkAverageRow> =
            aggregate_rows(self.collection, students::homework_average()).await?;
        match rows.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(row.average)),
            _ => Err(RepoError::InvalidData(format!(
                "homework average returned {} rows",
                rows.len()
            ))),
        }
    }

    /// Flags students with a homework score `<= max_score` via `$merge`.
    ///
    /// The cursor is drained so the merge has finished before this returns.
    pub async fn mark_failing_homework(&self, max_score: f64) -> RepoResult<()> {
        let pipeline = students::mark_failing_homework(max_score, self.collection.name());
        let cursor = self.collection.aggregate(pipeline).await?;
        let _: Vec<Document> = cursor.try_collect().await?;
        Ok(())
    }

    /// Deletes every student carrying `markedForDeletion: true`.
    pub async fn delete_marked(&self) -> RepoResult<u64> {
        let result = self
            .collection
            .delete_many(students::marked_for_deletion())
            .await?;
        Ok(result.deleted_count)
    }

    pub async fn flag_strong_quiz(&self, min_score: f64) -> RepoResult<Vec<StudentScoreRow>> {
        aggregate_rows(self.collection, students::flag_strong_quiz(min_score)).await
    }

    pub async fn average_groups(&self) -> RepoResult<Vec<AverageGroupRow>> {
        aggregate_rows(self.collection, students::average_groups()).await
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Student>> {
        let cursor = self.collection.find(Document::new()).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        Ok(self.collection.count_documents(Document::new()).await?)
    }
}
