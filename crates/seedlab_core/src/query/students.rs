//! Aggregation pipelines and filters for the `students` collection.
//!
//! Every pipeline starts by unwinding `scores`, so a student with several
//! matching scores appears once per score until a `$group` folds them back.

use crate::model::ScoreType;
use mongodb::bson::{doc, Bson, Document};

/// Row count kept by the ranking pipelines.
pub const TOP_N: i64 = 5;
/// Homework scores at or below this mark the student for deletion.
pub const FAILING_HOMEWORK_MAX: f64 = 60.0;
/// Quiz scores at or above this mark the student for the quiz flag.
pub const STRONG_QUIZ_MIN: f64 = 80.0;

fn unwind_scores() -> Document {
    doc! { "$unwind": "$scores" }
}

fn match_score_type(kind: ScoreType) -> Document {
    doc! { "$match": { "scores.type": kind.as_str() } }
}

/// Lowest `limit` homework scores, returned highest first.
pub fn lowest_homework_scores(limit: i64) -> Vec<Document> {
    vec![
        unwind_scores(),
        match_score_type(ScoreType::Homework),
        doc! { "$sort": { "scores.score": 1 } },
        doc! { "$limit": limit },
        doc! { "$sort": { "scores.score": -1 } },
    ]
}

/// First score as `quiz`, last score as `homework`, ranked by quiz desc then
/// homework asc, then the kept rows reordered by name.
pub fn quiz_homework_rank(limit: i64) -> Vec<Document> {
    vec![
        unwind_scores(),
        doc! {
            "$group": {
                "_id": { "_id": "$_id" },
                "name": { "$first": "$name" },
                "quiz": { "$first": "$scores.score" },
                "homework": { "$last": "$scores.score" },
            }
        },
        doc! { "$sort": { "quiz": -1, "homework": 1 } },
        doc! { "$limit": limit },
        doc! { "$sort": { "name": 1 } },
    ]
}

/// Students with the highest exam + quiz total.
pub fn top_quiz_exam_sum(limit: i64) -> Vec<Document> {
    vec![
        unwind_scores(),
        doc! {
            "$match": {
                "$or": [
                    { "scores.type": ScoreType::Exam.as_str() },
                    { "scores.type": ScoreType::Quiz.as_str() },
                ]
            }
        },
        doc! {
            "$group": {
                "_id": "$_id",
                "name": { "$first": "$name" },
                "quizexamSum": { "$sum": "$scores.score" },
            }
        },
        doc! { "$sort": { "quizexamSum": -1 } },
        doc! { "$limit": limit },
    ]
}

/// Single row with the mean of every homework score.
pub fn homework_average() -> Vec<Document> {
    vec![
        unwind_scores(),
        match_score_type(ScoreType::Homework),
        doc! { "$group": { "_id": Bson::Null, "average": { "$avg": "$scores.score" } } },
    ]
}

/// Flags every student with a homework score `<= max_score` and merges the
/// flagged document back into `into`, replacing the stored one.
///
/// The merged document is the unwound row, so its `scores` holds a single
/// score. Flagged students are meant to be deleted right after.
pub fn mark_failing_homework(max_score: f64, into: &str) -> Vec<Document> {
    vec![
        unwind_scores(),
        doc! {
            "$match": {
                "$and": [
                    { "scores.type": ScoreType::Homework.as_str() },
                    { "scores.score": { "$lte": max_score } },
                ]
            }
        },
        doc! { "$set": { "markedForDeletion": true } },
        doc! { "$merge": { "into": into, "whenMatched": "replace" } },
    ]
}

pub fn marked_for_deletion() -> Document {
    doc! { "markedForDeletion": true }
}

/// Quiz rows scoring `>= min_score`, each carrying `markedForQuiz: true`.
///
/// There is no write stage: the flag exists only in the returned rows.
pub fn flag_strong_quiz(min_score: f64) -> Vec<Document> {
    vec![
        unwind_scores(),
        doc! {
            "$match": {
                "$and": [
                    { "scores.type": ScoreType::Quiz.as_str() },
                    { "scores.score": { "$gte": min_score } },
                ]
            }
        },
        doc! { "$set": { "markedForQuiz": true } },
    ]
}

fn bucket(lower: f64, upper: f64, label: &str) -> Document {
    doc! {
        "case": {
            "$and": [
                { "$gte": ["$average", lower] },
                { "$lt": ["$average", upper] },
            ]
        },
        "then": label,
    }
}

/// Average score per student plus a `group` label: `a` for `[0, 40)`, `b`
/// for `[40, 60)`, `c` for `[60, 100)`, null otherwise.
pub fn average_groups() -> Vec<Document> {
    vec![
        unwind_scores(),
        doc! { "$group": { "_id": "$_id", "average": { "$avg": "$scores.score" } } },
        doc! {
            "$set": {
                "group": {
                    "$switch": {
                        "branches": [
                            bucket(0.0, 40.0, "a"),
                            bucket(40.0, 60.0, "b"),
                            bucket(60.0, 100.0, "c"),
                        ],
                        "default": Bson::Null,
                    }
                }
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_names(pipeline: &[Document]) -> Vec<&str> {
        pipeline
            .iter()
            .map(|stage| stage.keys().next().map(String::as_str).unwrap_or(""))
            .collect()
    }

    #[test]
    fn every_pipeline_unwinds_scores_first() {
        for pipeline in [
            lowest_homework_scores(TOP_N),
            quiz_homework_rank(TOP_N),
            top_quiz_exam_sum(TOP_N),
            homework_average(),
            mark_failing_homework(FAILING_HOMEWORK_MAX, "students"),
            flag_strong_quiz(STRONG_QUIZ_MIN),
            average_groups(),
        ] {
            assert_eq!(pipeline[0], doc! { "$unwind": "$scores" });
        }
    }

    #[test]
    fn lowest_homework_sorts_ascending_then_descending_around_limit() {
        let pipeline = lowest_homework_scores(5);
        assert_eq!(
            stage_names(&pipeline),
            vec!["$unwind", "$match", "$sort", "$limit", "$sort"]
        );
        assert_eq!(pipeline[2], doc! { "$sort": { "scores.score": 1 } });
        assert_eq!(pipeline[3], doc! { "$limit": 5_i64 });
        assert_eq!(pipeline[4], doc! { "$sort": { "scores.score": -1 } });
    }

    #[test]
    fn quiz_homework_rank_orders_by_name_last() {
        let pipeline = quiz_homework_rank(TOP_N);
        assert_eq!(
            stage_names(&pipeline),
            vec!["$unwind", "$group", "$sort", "$limit", "$sort"]
        );
        assert_eq!(pipeline[2], doc! { "$sort": { "quiz": -1, "homework": 1 } });
        assert_eq!(pipeline[4], doc! { "$sort": { "name": 1 } });
    }

    #[test]
    fn failing_homework_merges_back_with_replace() {
        let pipeline = mark_failing_homework(60.0, "students");
        assert_eq!(
            stage_names(&pipeline),
            vec!["$unwind", "$match", "$set", "$merge"]
        );
        assert_eq!(
            pipeline[3],
            doc! { "$merge": { "into": "students", "whenMatched": "replace" } }
        );
        assert_eq!(marked_for_deletion(), doc! { "markedForDeletion": true });
    }

    #[test]
    fn strong_quiz_has_no_write_stage() {
        let pipeline = flag_strong_quiz(STRONG_QUIZ_MIN);
        assert!(!stage_names(&pipeline)
            .iter()
            .any(|name| *name == "$merge" || *name == "$out"));
    }

    #[test]
    fn average_groups_switch_has_three_buckets_and_null_default() {
        let pipeline = average_groups();
        let switch = pipeline[2]
            .get_document("$set")
            .and_then(|set| set.get_document("group"))
            .and_then(|group| group.get_document("$switch"))
            .unwrap();
        assert_eq!(switch.get_array("branches").unwrap().len(), 3);
        assert_eq!(switch.get("default"), Some(&Bson::Null));
    }
}
