use secrecy::{ExposeSecret, SecretString};
use std::env;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// How the model is asked to shape its reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFormatKind {
    JsonObject,
    JsonSchema,
}

impl ResponseFormatKind {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json_object" => Some(ResponseFormatKind::JsonObject),
            "json_schema" => Some(ResponseFormatKind::JsonSchema),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub llm_top_p: f32,
    pub llm_response_format: ResponseFormatKind,
    pub generation_timeout_seconds: u64,
    pub generation_max_retries: u32,
    pub generation_backoff_ms: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

fn parsed_var<T: std::str::FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} has unparseable value '{}', using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY")
                    .or_else(|_| env::var("GROQ_API_KEY"))
                    .unwrap_or_default(),
            ),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_temperature: parsed_var("LLM_TEMPERATURE", 1.0),
            llm_max_tokens: parsed_var("LLM_MAX_TOKENS", 1024),
            llm_top_p: parsed_var("LLM_TOP_P", 1.0),
            llm_response_format: env::var("LLM_RESPONSE_FORMAT")
                .ok()
                .and_then(|v| ResponseFormatKind::from_env_value(&v))
                .unwrap_or(ResponseFormatKind::JsonObject),
            generation_timeout_seconds: parsed_var("GENERATION_TIMEOUT_SECONDS", 120),
            generation_max_retries: parsed_var("GENERATION_MAX_RETRIES", 2),
            generation_backoff_ms: parsed_var("GENERATION_BACKOFF_MS", 500),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parsed_var("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    /// Checks the settings the server cannot start without.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::Configuration(
                "API key not found. Set LLM_API_KEY (or GROQ_API_KEY)".to_string(),
            ));
        }

        if self.generation_timeout_seconds == 0 {
            return Err(AppError::Configuration(
                "GENERATION_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_temperature: 1.0,
            llm_max_tokens: 1024,
            llm_top_p: 1.0,
            llm_response_format: ResponseFormatKind::JsonObject,
            generation_timeout_seconds: 5,
            generation_max_retries: 0,
            generation_backoff_ms: 0,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}
