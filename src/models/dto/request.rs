use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::{Difficulty, QuizParameters};

fn default_num_questions() -> i64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateQuizRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub difficulty: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 10))]
    pub num_questions: i64,
}

impl TryFrom<GenerateQuizRequestDto> for QuizParameters {
    type Error = AppError;

    fn try_from(dto: GenerateQuizRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        let difficulty: Difficulty = dto.difficulty.parse()?;
        let num_questions = usize::try_from(dto.num_questions).map_err(|_| {
            AppError::InvalidInput(format!(
                "number of questions must be positive, got {}",
                dto.num_questions
            ))
        })?;

        QuizParameters::new(&dto.topic, difficulty, num_questions)
    }
}

/// Answers for every question of the active quiz, in question order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckAnswersRequestDto {
    pub selections: Vec<Vec<String>>,
}

/// Answer for a single question of the active quiz.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckQuestionRequestDto {
    #[serde(default)]
    pub selected: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str, difficulty: &str, num_questions: i64) -> GenerateQuizRequestDto {
        GenerateQuizRequestDto {
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            num_questions,
        }
    }

    #[test]
    fn valid_request_converts_to_parameters() {
        let params = QuizParameters::try_from(request("History", "Medium", 3)).unwrap();

        assert_eq!(params.topic(), "History");
        assert_eq!(params.difficulty(), Difficulty::Medium);
        assert_eq!(params.num_questions(), 3);
    }

    #[test]
    fn empty_topic_is_invalid_input() {
        let err = QuizParameters::try_from(request("", "Easy", 3)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn whitespace_topic_is_invalid_input() {
        let err = QuizParameters::try_from(request("   ", "Easy", 3)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn unknown_difficulty_is_invalid_input() {
        let err = QuizParameters::try_from(request("History", "Legendary", 3)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn non_positive_count_is_invalid_input() {
        for count in [0, -4] {
            let err = QuizParameters::try_from(request("History", "Hard", count)).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
    }

    #[test]
    fn num_questions_defaults_to_five() {
        let dto: GenerateQuizRequestDto =
            serde_json::from_str(r#"{"topic": "Geography", "difficulty": "Easy"}"#).unwrap();
        assert_eq!(dto.num_questions, 5);
    }

    #[test]
    fn check_question_request_defaults_to_no_selection() {
        let dto: CheckQuestionRequestDto = serde_json::from_str("{}").unwrap();
        assert!(dto.selected.is_empty());
    }
}
