//! Student document and the row shapes returned by student pipelines.
//!
//! # Invariants
//! - `_id` comes from the static dataset and is never reassigned.
//! - `scores` keeps dataset order: exam, quiz, homework, homework.
//! - The marker flags are absent on imported records.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type StudentId = i32;

/// Kind of graded work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    Homework,
    Quiz,
    Exam,
}

impl ScoreType {
    /// Value stored in `scores.type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Homework => "homework",
            Self::Quiz => "quiz",
            Self::Exam => "exam",
        }
    }
}

impl Display for ScoreType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "type")]
    pub kind: ScoreType,
    pub score: f64,
}

/// Student record imported from the bundled dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: StudentId,
    pub name: String,
    pub scores: Vec<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_for_deletion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_for_quiz: Option<bool>,
}

impl Student {
    /// Iterates the scores of one kind in stored order.
    pub fn scores_of(&self, kind: ScoreType) -> impl Iterator<Item = f64> + '_ {
        self.scores
            .iter()
            .filter(move |score| score.kind == kind)
            .map(|score| score.score)
    }

    /// Mean over every score, or `None` for a student without scores.
    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let total: f64 = self.scores.iter().map(|score| score.score).sum();
        Some(total / self.scores.len() as f64)
    }
}

/// One student document after `$unwind: "$scores"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentScoreRow {
    #[serde(rename = "_id")]
    pub id: StudentId,
    pub name: String,
    pub scores: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_for_quiz: Option<bool>,
}

/// Compound group key `{ _id: <student id> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentKey {
    #[serde(rename = "_id")]
    pub id: StudentId,
}

/// First and last unwound score per student.
///
/// The pipeline labels the first score `quiz` and the last `homework`
/// regardless of their actual `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizHomeworkRow {
    #[serde(rename = "_id")]
    pub key: StudentKey,
    pub name: String,
    pub quiz: f64,
    pub homework: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizExamSumRow {
    #[serde(rename = "_id")]
    pub id: StudentId,
    pub name: String,
    #[serde(rename = "quizexamSum")]
    pub quiz_exam_sum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomeworkAverageRow {
    pub average: f64,
}

/// Bucket assigned from a student's average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGroup {
    /// `[0, 40)`
    A,
    /// `[40, 60)`
    B,
    /// `[60, 100)`
    C,
}

impl ScoreGroup {
    /// Bucket for `average`, or `None` outside `[0, 100)`.
    pub fn for_average(average: f64) -> Option<Self> {
        match average {
            value if (0.0..40.0).contains(&value) => Some(Self::A),
            value if (40.0..60.0).contains(&value) => Some(Self::B),
            value if (60.0..100.0).contains(&value) => Some(Self::C),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageGroupRow {
    #[serde(rename = "_id")]
    pub id: StudentId,
    pub average: f64,
    /// `None` when the average falls outside every bucket.
    #[serde(default)]
    pub group: Option<ScoreGroup>,
}

#[cfg(test)]
mod tests {
    use super::{Score, ScoreGroup, ScoreType, Student};
    use mongodb::bson::{self, doc};

    fn student() -> Student {
        Student {
            id: 7,
            name: "Rae Kleim".to_string(),
            scores: vec![
                Score {
                    kind: ScoreType::Exam,
                    score: 80.0,
                },
                Score {
                    kind: ScoreType::Quiz,
                    score: 60.0,
                },
                Score {
                    kind: ScoreType::Homework,
                    score: 40.0,
                },
                Score {
                    kind: ScoreType::Homework,
                    score: 20.0,
                },
            ],
            marked_for_deletion: None,
            marked_for_quiz: None,
        }
    }

    #[test]
    fn student_serializes_with_wire_field_names_and_no_markers() {
        let document = bson::to_document(&student()).unwrap();
        assert_eq!(document.get_i32("_id").unwrap(), 7);
        assert!(!document.contains_key("markedForDeletion"));
        assert!(!document.contains_key("markedForQuiz"));

        let scores = document.get_array("scores").unwrap();
        let first = scores[0].as_document().unwrap();
        assert_eq!(first.get_str("type").unwrap(), "exam");
    }

    #[test]
    fn marker_flags_deserialize_in_camel_case() {
        let document = doc! {
            "_id": 3,
            "name": "Bao Ziler",
            "scores": [],
            "markedForDeletion": true,
        };
        let loaded: Student = bson::from_document(document).unwrap();
        assert_eq!(loaded.marked_for_deletion, Some(true));
        assert_eq!(loaded.marked_for_quiz, None);
    }

    #[test]
    fn scores_of_filters_by_kind_in_order() {
        let homework: Vec<f64> = student().scores_of(ScoreType::Homework).collect();
        assert_eq!(homework, vec![40.0, 20.0]);
        assert_eq!(student().average_score(), Some(50.0));
    }

    #[test]
    fn score_group_buckets_are_half_open() {
        assert_eq!(ScoreGroup::for_average(0.0), Some(ScoreGroup::A));
        assert_eq!(ScoreGroup::for_average(39.99), Some(ScoreGroup::A));
        assert_eq!(ScoreGroup::for_average(40.0), Some(ScoreGroup::B));
        assert_eq!(ScoreGroup::for_average(60.0), Some(ScoreGroup::C));
        assert_eq!(ScoreGroup::for_average(100.0), None);
        assert_eq!(ScoreGroup::for_average(-1.0), None);
    }
}
