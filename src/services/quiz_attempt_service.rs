use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    OutcomeStatus, Question, QuestionOutcome, QuestionSet, QuizAttempt, ScoringResult,
};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade every question of a quiz against the submitted selections
    pub fn score(question_set: &QuestionSet, selections: &[Vec<String>]) -> AppResult<ScoringResult> {
        if selections.len() != question_set.len() {
            return Err(AppError::InvalidInput(format!(
                "expected selections for {} questions, got {}",
                question_set.len(),
                selections.len()
            )));
        }

        let mut correct_count = 0;
        let mut outcomes = Vec::with_capacity(question_set.len());

        for (idx, (question, selected)) in question_set.iter().zip(selections).enumerate() {
            Self::check_selection(idx + 1, question, selected)?;

            let outcome = Self::score_question(question, selected);
            if outcome.is_correct() {
                correct_count += 1;
            }
            outcomes.push(outcome);
        }

        Ok(ScoringResult {
            correct_count,
            perfect_score: correct_count == question_set.len(),
            outcomes,
        })
    }

    /// Selected strings must be options of the question, each at most once
    pub fn check_selection(number: usize, question: &Question, selected: &[String]) -> AppResult<()> {
        let mut seen = HashSet::new();
        for option in selected {
            if !question.has_option(option) {
                return Err(AppError::InvalidInput(format!(
                    "question {}: '{}' is not one of the options",
                    number, option
                )));
            }
            if !seen.insert(option.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "question {}: '{}' was selected more than once",
                    number, option
                )));
            }
        }
        Ok(())
    }

    /// Grade an individual question
    pub fn score_question(question: &Question, selected: &[String]) -> QuestionOutcome {
        // More than one selection is wrong even when the answer is among them
        let status = match selected {
            [] => OutcomeStatus::NoSelection,
            [only] if *only == question.answer => OutcomeStatus::Correct,
            [_] => OutcomeStatus::Incorrect,
            _ => OutcomeStatus::MultipleSelected,
        };

        QuestionOutcome {
            status,
            chosen: selected.to_vec(),
        }
    }

    /// Create a new quiz attempt from grading results
    pub fn create_attempt(
        attempt_number: usize,
        question_set: &QuestionSet,
        selections: Vec<Vec<String>>,
        result: ScoringResult,
        started_at: DateTime<Utc>,
        submitted_at: DateTime<Utc>,
    ) -> QuizAttempt {
        let elapsed_ms = (submitted_at - started_at).num_milliseconds().max(0);

        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            attempt_number,
            question_set: question_set.clone(),
            selections,
            outcomes: result.outcomes,
            score: result.correct_count,
            total_possible: question_set.len(),
            perfect_score: result.perfect_score,
            started_at,
            submitted_at,
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{correct_selections, history_question_set, question};
    use chrono::TimeDelta;

    fn picks(options: &[&str]) -> Vec<String> {
        options.iter().map(|o| o.to_string()).collect()
    }

    fn rome() -> Question {
        question(
            "Who was the first emperor of Rome?",
            &["Julius Caesar", "Nero", "Augustus", "Caligula"],
            "Augustus",
        )
    }

    #[test]
    fn single_correct_selection_is_correct() {
        let outcome = QuizAttemptService::score_question(&rome(), &picks(&["Augustus"]));

        assert_eq!(outcome.status, OutcomeStatus::Correct);
        assert_eq!(outcome.chosen, picks(&["Augustus"]));
    }

    #[test]
    fn single_wrong_selection_is_incorrect() {
        let outcome = QuizAttemptService::score_question(&rome(), &picks(&["Nero"]));
        assert_eq!(outcome.status, OutcomeStatus::Incorrect);
    }

    #[test]
    fn no_selection_is_reported() {
        let outcome = QuizAttemptService::score_question(&rome(), &[]);

        assert_eq!(outcome.status, OutcomeStatus::NoSelection);
        assert!(outcome.chosen.is_empty());
    }

    #[test]
    fn multiple_selections_are_never_correct() {
        let outcome =
            QuizAttemptService::score_question(&rome(), &picks(&["Augustus", "Nero"]));

        assert_eq!(outcome.status, OutcomeStatus::MultipleSelected);
        assert!(!outcome.is_correct());
    }

    #[test]
    fn score_counts_only_correct_questions() {
        let set = history_question_set();
        let selections = vec![
            picks(&["Augustus"]),
            picks(&["Dynastic claims", "Economic sanctions"]),
            vec![],
        ];

        let result = QuizAttemptService::score(&set, &selections).unwrap();

        assert_eq!(result.correct_count, 1);
        assert!(!result.perfect_score);
        let statuses: Vec<OutcomeStatus> = result.outcomes.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![
                OutcomeStatus::Correct,
                OutcomeStatus::MultipleSelected,
                OutcomeStatus::NoSelection
            ]
        );
    }

    #[test]
    fn all_correct_is_a_perfect_score() {
        let set = history_question_set();
        let result = QuizAttemptService::score(&set, &correct_selections(&set)).unwrap();

        assert_eq!(result.correct_count, set.len());
        assert!(result.perfect_score);
    }

    #[test]
    fn score_rejects_selection_count_mismatch() {
        let set = history_question_set();
        let err = QuizAttemptService::score(&set, &[picks(&["Augustus"])]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn score_rejects_unknown_option() {
        let set = history_question_set();
        let selections = vec![picks(&["Hadrian"]), vec![], vec![]];

        let err = QuizAttemptService::score(&set, &selections).unwrap_err();
        assert_eq!(
            err,
            AppError::InvalidInput("question 1: 'Hadrian' is not one of the options".to_string())
        );
    }

    #[test]
    fn score_rejects_duplicate_selection() {
        let set = history_question_set();
        let selections = vec![vec![], vec![], picks(&["Treaty of Paris", "Treaty of Paris"])];

        let err = QuizAttemptService::score(&set, &selections).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn score_is_deterministic() {
        let set = history_question_set();
        let selections = vec![picks(&["Nero"]), picks(&["Dynastic claims"]), vec![]];

        assert_eq!(
            QuizAttemptService::score(&set, &selections).unwrap(),
            QuizAttemptService::score(&set, &selections).unwrap()
        );
    }

    #[test]
    fn create_attempt_records_score_and_elapsed_time() {
        let set = history_question_set();
        let selections = correct_selections(&set);
        let result = QuizAttemptService::score(&set, &selections).unwrap();
        let started_at = Utc::now();
        let submitted_at = started_at + TimeDelta::seconds(95);

        let attempt = QuizAttemptService::create_attempt(
            4,
            &set,
            selections.clone(),
            result,
            started_at,
            submitted_at,
        );

        assert_eq!(attempt.attempt_number, 4);
        assert_eq!(attempt.score, 3);
        assert_eq!(attempt.total_possible, 3);
        assert!(attempt.perfect_score);
        assert_eq!(attempt.selections, selections);
        assert_eq!(attempt.elapsed_seconds(), 95);
        assert!(!attempt.id.is_empty());
    }

    #[test]
    fn create_attempt_clamps_negative_elapsed_time() {
        let set = history_question_set();
        let selections = vec![vec![]; 3];
        let result = QuizAttemptService::score(&set, &selections).unwrap();
        let started_at = Utc::now();

        let attempt = QuizAttemptService::create_attempt(
            1,
            &set,
            selections,
            result,
            started_at,
            started_at - TimeDelta::seconds(5),
        );

        assert_eq!(attempt.elapsed_ms, 0);
    }
}
