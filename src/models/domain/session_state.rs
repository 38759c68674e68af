use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::domain::quiz::QuestionSet;
use crate::models::domain::quiz_attempt::QuizAttempt;

/// The quiz currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveQuiz {
    question_set: QuestionSet,
    started_at: DateTime<Utc>,
    answered: BTreeSet<usize>,
}

impl ActiveQuiz {
    pub fn question_set(&self) -> &QuestionSet {
        &self.question_set
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Number of questions answered correctly through single-question checks.
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.question_set.is_empty() && self.answered.len() == self.question_set.len()
    }
}

/// In-memory state of one quiz session: the active quiz and the attempt history.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    current: Option<ActiveQuiz>,
    attempts: Vec<QuizAttempt>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active quiz wholesale and resets the answered counter.
    pub fn start_quiz(&mut self, question_set: QuestionSet, now: DateTime<Utc>) {
        self.current = Some(ActiveQuiz {
            question_set,
            started_at: now,
            answered: BTreeSet::new(),
        });
    }

    pub fn current_quiz(&self) -> Option<&ActiveQuiz> {
        self.current.as_ref()
    }

    /// Counts question `index` as answered. Returns false if it was already
    /// counted or there is no such question.
    pub fn mark_answered(&mut self, index: usize) -> bool {
        match self.current.as_mut() {
            Some(quiz) if index < quiz.question_set.len() => quiz.answered.insert(index),
            _ => false,
        }
    }

    pub fn record_attempt(&mut self, attempt: QuizAttempt) {
        self.attempts.push(attempt);
    }

    /// Completed attempts, oldest first.
    pub fn attempts(&self) -> &[QuizAttempt] {
        &self.attempts
    }

    /// Looks up an attempt by its 1-based number.
    pub fn attempt(&self, attempt_number: usize) -> Option<&QuizAttempt> {
        attempt_number
            .checked_sub(1)
            .and_then(|idx| self.attempts.get(idx))
    }

    pub fn next_attempt_number(&self) -> usize {
        self.attempts.len() + 1
    }
}
