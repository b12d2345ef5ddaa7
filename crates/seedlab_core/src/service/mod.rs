//! Showcase orchestration.
//!
//! # Responsibility
//! - Drive the fixed example sequence over the repositories.
//! - Report per-example outcomes without letting one failure stop the run.

pub mod report;
pub mod showcase;

pub use report::{ExampleOutcome, ExampleOutput, ExampleStatus, RunReport};
pub use showcase::{run_example, Showcase, ARTICLES_PER_TYPE, USERS_PER_DEPARTMENT};
