use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Difficulty, Question};

/// Shape of the JSON object the model is asked to return.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneratedQuizDto {
	pub questions_list: Vec<GeneratedQuestionDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneratedQuestionDto {
	pub topic: String,
	pub difficulty: Difficulty,
	pub question: String,
	pub options: Vec<String>,
	pub answer: String,
	pub answer_explanation: String,
}

impl From<Question> for GeneratedQuestionDto {
	fn from(question: Question) -> Self {
		GeneratedQuestionDto {
			topic: question.topic,
			difficulty: question.difficulty,
			question: question.question,
			options: question.options,
			answer: question.answer,
			answer_explanation: question.answer_explanation,
		}
	}
}

impl TryFrom<GeneratedQuestionDto> for Question {
	type Error = AppError;

	fn try_from(dto: GeneratedQuestionDto) -> Result<Self, Self::Error> {
		let question = Question {
			topic: dto.topic,
			difficulty: dto.difficulty,
			question: dto.question,
			options: dto.options,
			answer: dto.answer,
			answer_explanation: dto.answer_explanation,
		};

		question
			.check_invariants()
			.map_err(AppError::MalformedResponse)?;

		Ok(question)
	}
}

/// JSON schema of [`GeneratedQuizDto`], for structured-output response formats.
pub fn generated_quiz_schema() -> AppResult<serde_json::Value> {
	let schema = schemars::schema_for!(GeneratedQuizDto);
	serde_json::to_value(&schema).map_err(|e| {
		AppError::Configuration(format!("cannot build response schema: {}", e))
	})
}
