use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::models::ModelDetails;
use crate::models::domain::{
    ActiveQuiz, Difficulty, OutcomeStatus, Question, QuestionOutcome, QuizAttempt,
};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub question: String,
    pub options: Vec<String>,
}

/// The active quiz as the front end renders it; answers stay hidden.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub topic: String,
    pub difficulty: Difficulty,
    pub started_at: DateTime<Utc>,
    pub question_count: usize,
    pub answered_count: usize,
    pub questions: Vec<QuestionView>,
}

impl From<&ActiveQuiz> for QuizView {
    fn from(quiz: &ActiveQuiz) -> Self {
        let question_set = quiz.question_set();
        QuizView {
            topic: question_set.topic.clone(),
            difficulty: question_set.difficulty,
            started_at: quiz.started_at(),
            question_count: question_set.len(),
            answered_count: quiz.answered_count(),
            questions: question_set
                .iter()
                .enumerate()
                .map(|(idx, q)| QuestionView {
                    number: idx + 1,
                    question: q.question.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

fn feedback_message(question: &Question, outcome: &QuestionOutcome) -> String {
    match outcome.status {
        OutcomeStatus::Correct => format!("Correct! {}", question.answer_explanation),
        OutcomeStatus::Incorrect => format!(
            "Incorrect! The correct answer is {}. {}",
            question.answer, question.answer_explanation
        ),
        OutcomeStatus::MultipleSelected => {
            "Incorrect! More than one option was selected. Only one answer is allowed.".to_string()
        }
        OutcomeStatus::NoSelection => "No options selected.".to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionFeedbackDto {
    pub number: usize,
    pub question: String,
    pub status: OutcomeStatus,
    pub chosen: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub message: String,
}

impl QuestionFeedbackDto {
    pub fn new(number: usize, question: &Question, outcome: &QuestionOutcome) -> Self {
        QuestionFeedbackDto {
            number,
            question: question.question.clone(),
            status: outcome.status,
            chosen: outcome.chosen.clone(),
            correct_answer: question.answer.clone(),
            explanation: question.answer_explanation.clone(),
            message: feedback_message(question, outcome),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckQuestionResponse {
    pub feedback: QuestionFeedbackDto,
    pub answered_count: usize,
    pub question_count: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckAnswersResponse {
    pub attempt_number: usize,
    pub score: usize,
    pub total: usize,
    pub perfect_score: bool,
    pub elapsed_seconds: i64,
    pub message: String,
    pub feedback: Vec<QuestionFeedbackDto>,
}

impl From<&QuizAttempt> for CheckAnswersResponse {
    fn from(attempt: &QuizAttempt) -> Self {
        CheckAnswersResponse {
            attempt_number: attempt.attempt_number,
            score: attempt.score,
            total: attempt.total_possible,
            perfect_score: attempt.perfect_score,
            elapsed_seconds: attempt.elapsed_seconds(),
            message: format!(
                "You got {} out of {} correct in {} seconds.",
                attempt.score,
                attempt.total_possible,
                attempt.elapsed_seconds()
            ),
            feedback: attempt
                .question_set
                .iter()
                .zip(&attempt.outcomes)
                .enumerate()
                .map(|(idx, (q, outcome))| QuestionFeedbackDto::new(idx + 1, q, outcome))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptSummaryDto {
    pub attempt_number: usize,
    pub label: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub score: usize,
    pub total: usize,
    pub perfect_score: bool,
    pub elapsed_seconds: i64,
    pub timestamp: String,
}

impl From<&QuizAttempt> for AttemptSummaryDto {
    fn from(attempt: &QuizAttempt) -> Self {
        AttemptSummaryDto {
            attempt_number: attempt.attempt_number,
            label: attempt.label(),
            topic: attempt.question_set.topic.clone(),
            difficulty: attempt.question_set.difficulty,
            score: attempt.score,
            total: attempt.total_possible,
            perfect_score: attempt.perfect_score,
            elapsed_seconds: attempt.elapsed_seconds(),
            timestamp: attempt.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptQuestionReviewDto {
    pub number: usize,
    pub question: String,
    pub your_answer: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptReviewDto {
    pub summary: AttemptSummaryDto,
    pub questions: Vec<AttemptQuestionReviewDto>,
}

impl From<&QuizAttempt> for AttemptReviewDto {
    fn from(attempt: &QuizAttempt) -> Self {
        let questions = attempt
            .question_set
            .iter()
            .zip(&attempt.selections)
            .zip(&attempt.outcomes)
            .enumerate()
            .map(|(idx, ((q, selected), outcome))| AttemptQuestionReviewDto {
                number: idx + 1,
                question: q.question.clone(),
                your_answer: selected.clone(),
                correct_answer: q.answer.clone(),
                explanation: q.answer_explanation.clone(),
                status: outcome.status,
            })
            .collect();

        AttemptReviewDto {
            summary: AttemptSummaryDto::from(attempt),
            questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub configured_model: String,
    pub models: &'static [ModelDetails],
}
