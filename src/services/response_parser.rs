use serde_json::Value;

use crate::{
    constants::prompts::QUESTIONS_FIELD,
    errors::{AppError, AppResult},
    models::{
        domain::{Question, QuestionSet, QuizParameters},
        dto::quiz_dto::GeneratedQuestionDto,
    },
};

fn malformed(message: impl Into<String>) -> AppError {
    AppError::MalformedResponse(message.into())
}

fn parse_question(number: usize, item: &Value, params: &QuizParameters) -> AppResult<Question> {
    let dto: GeneratedQuestionDto = serde_json::from_value(item.clone())
        .map_err(|e| malformed(format!("question {}: {}", number, e)))?;

    let question = Question::try_from(dto).map_err(|e| match e {
        AppError::MalformedResponse(reason) => malformed(format!("question {}: {}", number, reason)),
        other => other,
    })?;

    if question.difficulty != params.difficulty() {
        return Err(malformed(format!(
            "question {}: difficulty {} does not match requested {}",
            number,
            question.difficulty,
            params.difficulty()
        )));
    }

    Ok(question)
}

/// Parses a raw model reply into a question set of exactly
/// `params.num_questions()` questions.
///
/// Anything short of a complete, valid set is rejected with
/// [`AppError::MalformedResponse`]; questions are never dropped, padded or
/// repaired.
pub fn parse(raw: &str, params: &QuizParameters) -> AppResult<QuestionSet> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| malformed(format!("response is not valid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| malformed("response is not a JSON object"))?;

    if let Some(unexpected) = object.keys().find(|k| k.as_str() != QUESTIONS_FIELD) {
        return Err(malformed(format!("unexpected top-level field '{}'", unexpected)));
    }

    let items = object
        .get(QUESTIONS_FIELD)
        .ok_or_else(|| malformed(format!("missing '{}' field", QUESTIONS_FIELD)))?
        .as_array()
        .ok_or_else(|| malformed(format!("'{}' is not an array", QUESTIONS_FIELD)))?;

    if items.is_empty() {
        return Err(malformed(format!("'{}' is empty", QUESTIONS_FIELD)));
    }

    if items.len() != params.num_questions() {
        return Err(malformed(format!(
            "expected {} questions, got {}",
            params.num_questions(),
            items.len()
        )));
    }

    let questions = items
        .iter()
        .enumerate()
        .map(|(idx, item)| parse_question(idx + 1, item, params))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(QuestionSet::new(
        params.topic(),
        params.difficulty(),
        questions,
    ))
}
