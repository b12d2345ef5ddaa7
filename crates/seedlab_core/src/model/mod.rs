//! Document shapes stored in and read back from MongoDB.
//!
//! # Responsibility
//! - Define the `users`, `articles` and `students` document types.
//! - Define typed rows for the student aggregation pipelines.
//!
//! # Invariants
//! - Field names on the wire are camelCase; enum values are lowercase.
//! - Records carry no identity beyond `_id`.

pub mod article;
pub mod student;
pub mod user;

pub use article::{Article, ArticleType};
pub use student::{
    AverageGroupRow, HomeworkAverageRow, QuizExamSumRow, QuizHomeworkRow, Score, ScoreGroup,
    ScoreType, Student, StudentId, StudentKey, StudentScoreRow,
};
pub use user::{Department, User};
