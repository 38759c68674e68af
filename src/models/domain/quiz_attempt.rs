use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::QuestionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Correct,
    Incorrect,
    NoSelection,
    MultipleSelected,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOutcome {
    pub status: OutcomeStatus,
    pub chosen: Vec<String>,
}

impl QuestionOutcome {
    pub fn is_correct(&self) -> bool {
        self.status == OutcomeStatus::Correct
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringResult {
    pub correct_count: usize,
    pub outcomes: Vec<QuestionOutcome>,
    pub perfect_score: bool,
}

/// A completed answering pass over one question set. Never changed once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub attempt_number: usize,
    pub question_set: QuestionSet,
    pub selections: Vec<Vec<String>>,
    pub outcomes: Vec<QuestionOutcome>,
    pub score: usize,
    pub total_possible: usize,
    pub perfect_score: bool,
    pub started_at: DateTime<Utc>,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}

impl QuizAttempt {
    pub fn elapsed(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.elapsed_ms)
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_ms / 1000
    }

    /// Sidebar label, e.g. `Attempt 1 : 2/3 Correct`.
    pub fn label(&self) -> String {
        format!(
            "Attempt {} : {}/{} Correct",
            self.attempt_number, self.score, self.total_possible
        )
    }
}
