//! Static student dataset.
//!
//! # Invariants
//! - The dataset is read once and never mutated in memory.
//! - Student ids are unique; the dataset is not empty.

use crate::model::{Student, StudentId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENTS_JSON: &str = include_str!("../../data/students.json");

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
    Empty,
    DuplicateId(StudentId),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid student dataset: {err}"),
            Self::Empty => write!(f, "student dataset is empty"),
            Self::DuplicateId(id) => write!(f, "student dataset repeats _id {id}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Empty | Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Returns the bundled student records.
pub fn students() -> DatasetResult<Vec<Student>> {
    parse_students(STUDENTS_JSON)
}

/// Parses a JSON array of student records and checks id uniqueness.
pub fn parse_students(raw: &str) -> DatasetResult<Vec<Student>> {
    let students: Vec<Student> = serde_json::from_str(raw)?;
    if students.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut seen = HashSet::with_capacity(students.len());
    for student in &students {
        if !seen.insert(student.id) {
            return Err(DatasetError::DuplicateId(student.id));
        }
    }

    Ok(students)
}
