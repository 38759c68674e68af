use chrono::{DateTime, Utc};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, QuestionOutcome, QuizAttempt, SessionState};
use crate::services::quiz_attempt_service::QuizAttemptService;

/// Result of checking one question of the active quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCheck {
    pub number: usize,
    pub question: Question,
    pub outcome: QuestionOutcome,
    pub answered_count: usize,
    pub question_count: usize,
    pub completed: bool,
    /// Set once every question has been answered correctly.
    pub elapsed_ms: Option<i64>,
}

fn no_active_quiz() -> AppError {
    AppError::NotFound("no active quiz; generate one first".to_string())
}

pub struct SessionService;

impl SessionService {
    /// Scores the whole active quiz and appends the resulting attempt to the
    /// history. Nothing is recorded when the selections are rejected.
    pub fn check_answers(
        session: &mut SessionState,
        selections: Vec<Vec<String>>,
        now: DateTime<Utc>,
    ) -> AppResult<QuizAttempt> {
        let quiz = session.current_quiz().ok_or_else(no_active_quiz)?;
        let question_set = quiz.question_set();

        let result = QuizAttemptService::score(question_set, &selections)?;
        let attempt = QuizAttemptService::create_attempt(
            session.next_attempt_number(),
            question_set,
            selections,
            result,
            quiz.started_at(),
            now,
        );

        log::info!(
            "Recorded attempt {}: {}/{} correct in {}s",
            attempt.attempt_number,
            attempt.score,
            attempt.total_possible,
            attempt.elapsed_seconds()
        );
        session.record_attempt(attempt.clone());

        Ok(attempt)
    }

    /// Checks a single question (0-based `index`). A correct answer counts
    /// towards the answered total once.
    pub fn check_question(
        session: &mut SessionState,
        index: usize,
        selected: Vec<String>,
        now: DateTime<Utc>,
    ) -> AppResult<QuestionCheck> {
        let quiz = session.current_quiz().ok_or_else(no_active_quiz)?;
        let question = quiz
            .question_set()
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("question {} does not exist", index + 1)))?;
        let started_at = quiz.started_at();

        QuizAttemptService::check_selection(index + 1, &question, &selected)?;
        let outcome = QuizAttemptService::score_question(&question, &selected);

        if outcome.is_correct() {
            session.mark_answered(index);
        }

        let (answered_count, question_count, completed) = session
            .current_quiz()
            .map(|q| (q.answered_count(), q.question_set().len(), q.is_complete()))
            .unwrap_or_default();

        let elapsed_ms =
            completed.then(|| (now - started_at).num_milliseconds().max(0));

        Ok(QuestionCheck {
            number: index + 1,
            question,
            outcome,
            answered_count,
            question_count,
            completed,
            elapsed_ms,
        })
    }
}
