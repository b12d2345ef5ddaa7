//! The seventeen query examples and the wrapper that runs them.
//!
//! # Responsibility
//! - Seed users, articles and students through the repositories.
//! - Run each example through `run_example`, which logs and swallows errors.
//!
//! # Invariants
//! - Examples run strictly in order; each is awaited before the next starts.
//! - A failing example never stops the ones after it.
//! - Examples 2-4 and 6-9 only see data if 1 and 5 succeeded; 11-17 need 10.

use super::report::{ExampleOutcome, ExampleOutput, ExampleStatus, RunReport};
use crate::db::Collections;
use crate::fixtures::{
    generate_article, generate_user, random_first_name, ArticleOverrides, UserOverrides,
};
use crate::model::{ArticleType, Department, Student};
use crate::query::articles::{OTHER_TAGS, PULLED_TAGS, TYPE_A_TAGS};
use crate::query::students::{FAILING_HOMEWORK_MAX, STRONG_QUIZ_MIN, TOP_N};
use crate::repo::{ArticleRepository, RepoResult, StudentRepository, UserRepository};
use log::{debug, error, info};
use rand::rngs::StdRng;
use std::fmt::Debug;
use std::future::Future;
use std::time::Instant;

pub const USERS_PER_DEPARTMENT: usize = 2;
pub const ARTICLES_PER_TYPE: usize = 5;

/// Awaits one example and turns its result into an outcome.
///
/// Success is logged at `info` with the output summary; failure is logged at
/// `error` and recorded as `ExampleStatus::Failed`. Never returns an error.
pub async fn run_example<F>(number: u8, label: &'static str, operation: F) -> ExampleOutcome
where
    F: Future<Output = RepoResult<ExampleOutput>>,
{
    let started_at = Instant::now();
    debug!("event=example module=showcase status=start number={number} label=\"{label}\"");

    let result = operation.await;
    let duration_ms = started_at.elapsed().as_millis();
    let status = match result {
        Ok(output) => {
            info!(
                "event=example module=showcase status=ok number={} label=\"{}\" duration_ms={} {}",
                number, label, duration_ms, output
            );
            ExampleStatus::Succeeded(output)
        }
        Err(err) => {
            error!(
                "event=example module=showcase status=error number={} label=\"{}\" duration_ms={} error={}",
                number, label, duration_ms, err
            );
            ExampleStatus::Failed(err.to_string())
        }
    };

    ExampleOutcome {
        number,
        label,
        status,
        duration_ms,
    }
}

fn log_rows<T: Debug>(number: u8, rows: &[T]) {
    for (index, row) in rows.iter().enumerate() {
        debug!("event=example_row module=showcase number={number} index={index} row={row:?}");
    }
}

/// Runs the showcase against one set of freshly reset collections.
pub struct Showcase<'c> {
    users: UserRepository<'c>,
    articles: ArticleRepository<'c>,
    students: StudentRepository<'c>,
    dataset: Vec<Student>,
    rng: StdRng,
}

impl<'c> Showcase<'c> {
    pub fn new(collections: &'c Collections, dataset: Vec<Student>, rng: StdRng) -> Self {
        Self {
            users: UserRepository::new(&collections.users),
            articles: ArticleRepository::new(&collections.articles),
            students: StudentRepository::new(&collections.students),
            dataset,
            rng,
        }
    }

    /// Runs examples 1 through 17 in order and returns their outcomes.
    pub async fn run_all(mut self) -> RunReport {
        let mut report = RunReport::default();

        report.push(run_example(1, "create users per department", self.create_users()).await);
        report.push(run_example(2, "delete one department a user", self.delete_one_user()).await);
        report.push(run_example(3, "rename department b users", self.rename_users()).await);
        report.push(run_example(4, "find department c users", self.find_users()).await);

        report.push(run_example(5, "create articles per type", self.create_articles()).await);
        report.push(run_example(6, "tag type a articles", self.tag_type_a_articles()).await);
        report.push(run_example(7, "tag other articles", self.tag_other_articles()).await);
        report.push(run_example(8, "find articles by tag", self.find_tagged_articles()).await);
        report.push(run_example(9, "pull tags from articles", self.pull_tags()).await);

        report.push(run_example(10, "import students", self.import_students()).await);

        report.push(run_example(11, "lowest homework scores", self.lowest_homework()).await);
        report.push(run_example(12, "quiz and homework rank", self.quiz_homework_rank()).await);
        report.push(run_example(13, "top quiz and exam sum", self.top_quiz_exam()).await);
        report.push(run_example(14, "homework average", self.homework_average()).await);
        report.push(
            run_example(15, "delete failing homework", self.delete_failing_homework()).await,
        );
        report.push(run_example(16, "flag strong quiz", self.flag_strong_quiz()).await);
        report.push(run_example(17, "group by average score", self.group_by_average()).await);

        info!(
            "event=showcase_done module=showcase status={} succeeded={} failed={}",
            if report.failed() == 0 { "ok" } else { "partial" },
            report.succeeded(),
            report.failed()
        );
        report
    }

    /// Example 1: two generated users for each department.
    pub async fn create_users(&mut self) -> RepoResult<ExampleOutput> {
        let mut users = Vec::with_capacity(USERS_PER_DEPARTMENT * Department::ALL.len());
        for _ in 0..USERS_PER_DEPARTMENT {
            for department in Department::ALL {
                users.push(generate_user(UserOverrides::new(department), &mut self.rng));
            }
        }
        let inserted = self.users.insert_many(&users).await?;
        Ok(ExampleOutput::Inserted(inserted))
    }

    /// Example 2: delete the first department `a` user.
    pub async fn delete_one_user(&mut self) -> RepoResult<ExampleOutput> {
        let deleted = self.users.delete_one_in_department(Department::A).await?;
        Ok(ExampleOutput::Deleted(deleted))
    }

    /// Example 3: one new random first name for every department `b` user.
    pub async fn rename_users(&mut self) -> RepoResult<ExampleOutput> {
        let first_name = random_first_name(&mut self.rng);
        let summary = self
            .users
            .rename_department(Department::B, &first_name)
            .await?;
        Ok(ExampleOutput::Updated {
            matched: summary.matched,
            modified: summary.modified,
        })
    }

    /// Example 4: department `c` users.
    pub async fn find_users(&mut self) -> RepoResult<ExampleOutput> {
        let users = self.users.find_in_department(Department::C).await?;
        log_rows(4, &users);
        Ok(ExampleOutput::Rows(users.len()))
    }

    /// Example 5: five generated articles for each type.
    pub async fn create_articles(&mut self) -> RepoResult<ExampleOutput> {
        let mut articles = Vec::with_capacity(ARTICLES_PER_TYPE * ArticleType::ALL.len());
        for _ in 0..ARTICLES_PER_TYPE {
            for kind in ArticleType::ALL {
                articles.push(generate_article(ArticleOverrides::new(kind), &mut self.rng));
            }
        }
        let inserted = self.articles.insert_many(&articles).await?;
        Ok(ExampleOutput::Inserted(inserted))
    }

    /// Example 6: type `a` articles get `[tag1-a, tag2-a, tag3]`.
    pub async fn tag_type_a_articles(&mut self) -> RepoResult<ExampleOutput> {
        let summary = self
            .articles
            .replace_tags_for_type(ArticleType::A, &TYPE_A_TAGS)
            .await?;
        Ok(ExampleOutput::Updated {
            matched: summary.matched,
            modified: summary.modified,
        })
    }

    /// Example 7: every other article gets `[tag2, tag3, super]`.
    pub async fn tag_other_articles(&mut self) -> RepoResult<ExampleOutput> {
        let summary = self
            .articles
            .replace_tags_except_type(ArticleType::A, &OTHER_TAGS)
            .await?;
        Ok(ExampleOutput::Updated {
            matched: summary.matched,
            modified: summary.modified,
        })
    }

    /// Example 8: articles tagged `tag2` or `tag1-a`.
    pub async fn find_tagged_articles(&mut self) -> RepoResult<ExampleOutput> {
        let articles = self.articles.find_with_any_tag(&PULLED_TAGS).await?;
        log_rows(8, &articles);
        Ok(ExampleOutput::Rows(articles.len()))
    }

    /// Example 9: pull `tag2` and `tag1-a` from every article.
    pub async fn pull_tags(&mut self) -> RepoResult<ExampleOutput> {
        let summary = self.articles.pull_tags_everywhere(&PULLED_TAGS).await?;
        Ok(ExampleOutput::Updated {
            matched: summary.matched,
            modified: summary.modified,
        })
    }

    /// Example 10: import the static dataset.
    pub async fn import_students(&mut self) -> RepoResult<ExampleOutput> {
        let inserted = self.students.insert_many(&self.dataset).await?;
        Ok(ExampleOutput::Inserted(inserted))
    }

    /// Example 11: the five lowest homework scores, highest first.
    pub async fn lowest_homework(&mut self) -> RepoResult<ExampleOutput> {
        let rows = self.students.lowest_homework_scores(TOP_N).await?;
        log_rows(11, &rows);
        Ok(ExampleOutput::Rows(rows.len()))
    }

    /// Example 12: first/last score ranking, ordered by name.
    pub async fn quiz_homework_rank(&mut self) -> RepoResult<ExampleOutput> {
        let rows = self.students.quiz_homework_rank(TOP_N).await?;
        log_rows(12, &rows);
        Ok(ExampleOutput::Rows(rows.len()))
    }

    /// Example 13: top five by exam + quiz total.
    pub async fn top_quiz_exam(&mut self) -> RepoResult<ExampleOutput> {
        let rows = self.students.top_quiz_exam_sum(TOP_N).await?;
        log_rows(13, &rows);
        Ok(ExampleOutput::Rows(rows.len()))
    }

    /// Example 14: mean homework score.
    pub async fn homework_average(&mut self) -> RepoResult<ExampleOutput> {
        let average = self.students.homework_average().await?;
        Ok(ExampleOutput::Average(average))
    }

    /// Example 15: mark students with a homework score <= 60, then delete
    /// the marked ones.
    pub async fn delete_failing_homework(&mut self) -> RepoResult<ExampleOutput> {
        self.students
            .mark_failing_homework(FAILING_HOMEWORK_MAX)
            .await?;
        let deleted = self.students.delete_marked().await?;
        Ok(ExampleOutput::MarkedThenDeleted { deleted })
    }

    /// Example 16: quiz rows >= 80 with `markedForQuiz` set in the result.
    pub async fn flag_strong_quiz(&mut self) -> RepoResult<ExampleOutput> {
        let rows = self.students.flag_strong_quiz(STRONG_QUIZ_MIN).await?;
        log_rows(16, &rows);
        Ok(ExampleOutput::Rows(rows.len()))
    }

    /// Example 17: per-student average with its `a`/`b`/`c` group.
    pub async fn group_by_average(&mut self) -> RepoResult<ExampleOutput> {
        let rows = self.students.average_groups().await?;
        log_rows(17, &rows);
        Ok(ExampleOutput::Rows(rows.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::run_example;
    use crate::repo::RepoError;
    use crate::service::report::{ExampleOutput, ExampleStatus};

    #[tokio::test]
    async fn run_example_records_success_output() {
        let outcome = run_example(1, "ok", async { Ok(ExampleOutput::Inserted(6)) }).await;
        assert_eq!(outcome.number, 1);
        assert_eq!(
            outcome.status,
            ExampleStatus::Succeeded(ExampleOutput::Inserted(6))
        );
    }

    #[tokio::test]
    async fn run_example_swallows_errors() {
        let outcome = run_example(15, "fails", async {
            Err(RepoError::InvalidData("boom".to_string()))
        })
        .await;

        assert!(!outcome.is_success());
        match outcome.status {
            ExampleStatus::Failed(message) => assert!(message.contains("boom")),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
