use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::Difficulty;

/// One multiple-choice trivia question.
///
/// `answer` always equals exactly one entry of `options`; shuffling only
/// reorders `options`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub topic: String,
    pub difficulty: Difficulty,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub answer_explanation: String,
}

impl Question {
    /// Returns a description of the first broken invariant, if any.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question text is empty".to_string());
        }

        if self.options.len() < 2 {
            return Err(format!(
                "expected at least 2 options, found {}",
                self.options.len()
            ));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(format!("duplicate option '{}'", option));
            }
        }

        let matches = self.options.iter().filter(|o| **o == self.answer).count();
        if matches != 1 {
            return Err(format!("answer '{}' is not one of the options", self.answer));
        }

        Ok(())
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
