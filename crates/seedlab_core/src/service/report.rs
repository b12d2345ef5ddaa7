//! Per-example outcomes and the run report.

use std::fmt::{Display, Formatter};

/// What one example did, as logged and reported.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleOutput {
    Inserted(usize),
    Deleted(u64),
    Updated { matched: u64, modified: u64 },
    Rows(usize),
    Average(Option<f64>),
    MarkedThenDeleted { deleted: u64 },
}

impl Display for ExampleOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inserted(count) => write!(f, "inserted={count}"),
            Self::Deleted(count) => write!(f, "deleted={count}"),
            Self::Updated { matched, modified } => {
                write!(f, "matched={matched} modified={modified}")
            }
            Self::Rows(count) => write!(f, "rows={count}"),
            Self::Average(Some(average)) => write!(f, "average={average:.4}"),
            Self::Average(None) => write!(f, "average=none"),
            Self::MarkedThenDeleted { deleted } => write!(f, "marked_then_deleted={deleted}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExampleStatus {
    Succeeded(ExampleOutput),
    /// Rendered error message; the error itself was logged and dropped.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleOutcome {
    pub number: u8,
    pub label: &'static str,
    pub status: ExampleStatus,
    pub duration_ms: u128,
}

impl ExampleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ExampleStatus::Succeeded(_))
    }

    pub fn output(&self) -> Option<&ExampleOutput> {
        match &self.status {
            ExampleStatus::Succeeded(output) => Some(output),
            ExampleStatus::Failed(_) => None,
        }
    }
}

/// Outcomes of a full run, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub outcomes: Vec<ExampleOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: ExampleOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn outcome(&self, number: u8) -> Option<&ExampleOutcome> {
        self.outcomes.iter().find(|outcome| outcome.number == number)
    }
}
