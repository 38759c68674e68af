use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::{Config, ResponseFormatKind},
    constants::prompts::SYSTEM_PROMPT,
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, QuizParameters},
        dto::quiz_dto::generated_quiz_schema,
    },
    services::prompt_builder::build_prompt,
};

/// Everything the generation capability needs for one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub num_questions: usize,
}

impl GenerationRequest {
    pub fn for_parameters(params: &QuizParameters) -> Self {
        GenerationRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: build_prompt(params.topic(), params.difficulty(), params.num_questions()),
            topic: params.topic().to_string(),
            difficulty: params.difficulty(),
            num_questions: params.num_questions(),
        }
    }
}

/// Source of quiz questions. Returns the raw reply text, unparsed.
///
/// Transport failures (network, auth, rate limits) are reported as
/// [`AppError::GenerationUnavailable`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}

/// Generator backed by an OpenAI-compatible chat completions endpoint.
pub struct OpenAiQuestionGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    response_format: ResponseFormatKind,
}

impl OpenAiQuestionGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.llm_api_base)
            .with_api_key(config.llm_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
            top_p: config.llm_top_p,
            response_format: config.llm_response_format,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn response_format(&self) -> AppResult<Value> {
        let format = match self.response_format {
            ResponseFormatKind::JsonObject => json!({ "type": "json_object" }),
            ResponseFormatKind::JsonSchema => json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "quiz_questions",
                    "strict": true,
                    "schema": generated_quiz_schema()?,
                }
            }),
        };
        Ok(format)
    }

    fn build_payload(&self, request: &GenerationRequest) -> AppResult<Value> {
        let response_format = self.response_format()?;
        Ok(json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "top_p": self.top_p,
            "stream": false,
            "response_format": response_format,
        }))
    }
}

/// Pulls the first choice's message content out of a chat completion body.
fn extract_content(response: &Value) -> AppResult<String> {
    response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::GenerationUnavailable("model returned no message content".to_string())
        })
}

#[async_trait]
impl QuestionGenerator for OpenAiQuestionGenerator {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        log::debug!(
            "Requesting {} {} questions on '{}' from {} ({} prompt chars)",
            request.num_questions,
            request.difficulty,
            request.topic,
            self.model,
            request.system_prompt.len() + request.user_prompt.len()
        );

        let response: Value = self
            .client
            .chat()
            .create_byot(self.build_payload(request)?)
            .await?;

        let content = extract_content(&response)?;
        log::debug!("Model replied with {} chars", content.len());

        Ok(content)
    }
}
