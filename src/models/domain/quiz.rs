use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_question::Question;

/// Largest quiz a single request may ask for.
pub const MAX_QUESTIONS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "unknown difficulty '{}', expected one of Easy, Medium, Hard",
                    s
                ))
            })
    }
}

/// Validated input for one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizParameters {
    topic: String,
    difficulty: Difficulty,
    num_questions: usize,
}

impl QuizParameters {
    pub fn new(topic: &str, difficulty: Difficulty, num_questions: usize) -> AppResult<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::InvalidInput("topic cannot be empty".to_string()));
        }

        if num_questions == 0 || num_questions > MAX_QUESTIONS {
            return Err(AppError::InvalidInput(format!(
                "number of questions must be between 1 and {}, got {}",
                MAX_QUESTIONS, num_questions
            )));
        }

        Ok(Self {
            topic: topic.to_string(),
            difficulty,
            num_questions,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn num_questions(&self) -> usize {
        self.num_questions
    }
}

/// Questions generated together for one request, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionSet {
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(topic: &str, difficulty: Difficulty, questions: Vec<Question>) -> Self {
        QuestionSet {
            topic: topic.to_string(),
            difficulty,
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}
