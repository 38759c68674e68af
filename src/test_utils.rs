#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;

    use crate::models::domain::{
        Difficulty, OutcomeStatus, QuestionOutcome, QuestionSet, QuizAttempt,
    };
    use crate::models::domain::Question;

    /// Creates a Medium history question with a placeholder explanation
    pub fn question(text: &str, options: &[&str], answer: &str) -> Question {
        Question {
            topic: "History".to_string(),
            difficulty: Difficulty::Medium,
            question: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            answer_explanation: "Because.".to_string(),
        }
    }

    /// The three-question History/Medium set used throughout the tests
    pub fn history_question_set() -> QuestionSet {
        QuestionSet::new(
            "History",
            Difficulty::Medium,
            vec![
                question(
                    "Who was the first emperor of Rome?",
                    &["Julius Caesar", "Nero", "Augustus", "Caligula"],
                    "Augustus",
                ),
                question(
                    "What was the main cause of the Hundred Years' War?",
                    &[
                        "Territorial disputes",
                        "Religious differences",
                        "Economic sanctions",
                        "Dynastic claims",
                    ],
                    "Dynastic claims",
                ),
                question(
                    "Which treaty ended World War I?",
                    &[
                        "Treaty of Versailles",
                        "Treaty of Paris",
                        "Treaty of Tordesillas",
                        "Treaty of Ghent",
                    ],
                    "Treaty of Versailles",
                ),
            ],
        )
    }

    /// Raw model reply wrapping the given questions
    pub fn raw_response(question_set: &QuestionSet) -> String {
        serde_json::json!({ "questions_list": question_set.questions }).to_string()
    }

    /// Selections that pick the correct answer for every question
    pub fn correct_selections(question_set: &QuestionSet) -> Vec<Vec<String>> {
        question_set
            .iter()
            .map(|q| vec![q.answer.clone()])
            .collect()
    }

    /// A recorded attempt on the history set with the given score
    pub fn attempt_for(attempt_number: usize, score: usize) -> QuizAttempt {
        let question_set = history_question_set();
        let total_possible = question_set.len();
        let now = Utc::now();

        QuizAttempt {
            id: format!("attempt-{}", attempt_number),
            attempt_number,
            selections: vec![vec![]; total_possible],
            outcomes: vec![
                QuestionOutcome {
                    status: OutcomeStatus::NoSelection,
                    chosen: vec![],
                };
                total_possible
            ],
            question_set,
            score,
            total_possible,
            perfect_score: score == total_possible,
            started_at: now,
            submitted_at: now,
            elapsed_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_history_question_set() {
        let set = history_question_set();
        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|q| q.check_invariants().is_ok()));
    }

    #[test]
    fn test_fixtures_raw_response_has_questions_list() {
        let raw = raw_response(&history_question_set());
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["questions_list"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_fixtures_correct_selections() {
        let set = history_question_set();
        let selections = correct_selections(&set);
        assert_eq!(selections[0], vec!["Augustus".to_string()]);
    }
}
