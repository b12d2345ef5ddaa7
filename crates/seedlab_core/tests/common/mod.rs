#![allow(dead_code)]

use seedlab_core::model::{ScoreType, Student, StudentId};
use seedlab_core::{reset_collections, Collections, Connection};
use std::collections::BTreeSet;

pub const TEST_URI_ENV: &str = "SEEDLAB_TEST_MONGODB_URI";

/// Live database for one test, dropped by `teardown`.
pub struct LiveDb {
    pub uri: String,
    pub name: String,
    pub connection: Connection,
}

/// Connects to a fresh uniquely named database.
///
/// Live tests are `#[ignore]`d; running them without a configured server
/// fails instead of passing silently.
pub async fn live_db() -> LiveDb {
    let uri = std::env::var(TEST_URI_ENV)
        .unwrap_or_else(|_| panic!("{TEST_URI_ENV} must point at a MongoDB 4.4+ server"));
    let name = format!("seedlab_test_{}", uuid::Uuid::new_v4().simple());
    let connection = Connection::connect(&uri, &name).await.unwrap();
    LiveDb {
        uri,
        name,
        connection,
    }
}

impl LiveDb {
    pub async fn reset(&self) -> Collections {
        reset_collections(self.connection.database()).await.unwrap()
    }

    pub async fn teardown(self) {
        self.connection.database().drop().await.unwrap();
        self.connection.close().await;
    }
}

pub fn homework_scores(students: &[Student]) -> Vec<f64> {
    students
        .iter()
        .flat_map(|student| student.scores_of(ScoreType::Homework))
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Students with at least one homework score `<= max`.
pub fn students_with_homework_at_most(students: &[Student], max: f64) -> BTreeSet<StudentId> {
    students
        .iter()
        .filter(|student| student.scores_of(ScoreType::Homework).any(|score| score <= max))
        .map(|student| student.id)
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
