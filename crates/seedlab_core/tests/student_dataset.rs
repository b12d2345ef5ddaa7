use seedlab_core::fixtures::{parse_students, students, DatasetError};
use seedlab_core::model::{ScoreGroup, ScoreType};
use std::collections::HashSet;

#[test]
fn bundled_dataset_loads_with_unique_ids() {
    let students = students().unwrap();
    assert!(!students.is_empty());

    let ids: HashSet<_> = students.iter().map(|student| student.id).collect();
    assert_eq!(ids.len(), students.len());
}

#[test]
fn every_student_has_exam_quiz_and_two_homework_scores_in_order() {
    for student in students().unwrap() {
        let kinds: Vec<ScoreType> = student.scores.iter().map(|score| score.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScoreType::Exam,
                ScoreType::Quiz,
                ScoreType::Homework,
                ScoreType::Homework
            ],
            "unexpected score layout for {}",
            student.name
        );
        assert!(student.marked_for_deletion.is_none());
        assert!(student.marked_for_quiz.is_none());
    }
}

#[test]
fn every_average_falls_into_a_group() {
    for student in students().unwrap() {
        let average = student.average_score().unwrap();
        assert!(
            ScoreGroup::for_average(average).is_some(),
            "{} has average {average}",
            student.name
        );
    }
}

#[test]
fn dataset_has_students_on_both_sides_of_the_homework_cutoff() {
    let students = students().unwrap();
    let failing = students
        .iter()
        .filter(|student| student.scores_of(ScoreType::Homework).any(|score| score <= 60.0))
        .count();
    assert!(failing > 0);
    assert!(failing < students.len());
}

#[test]
fn parse_rejects_empty_duplicate_and_malformed_input() {
    assert!(matches!(parse_students("[]"), Err(DatasetError::Empty)));

    let duplicate = r#"[
        {"_id": 1, "name": "a", "scores": []},
        {"_id": 1, "name": "b", "scores": []}
    ]"#;
    assert!(matches!(
        parse_students(duplicate),
        Err(DatasetError::DuplicateId(1))
    ));

    let bad_kind = r#"[{"_id": 1, "name": "a", "scores": [{"type": "essay", "score": 3}]}]"#;
    assert!(matches!(parse_students(bad_kind), Err(DatasetError::Parse(_))));
}
