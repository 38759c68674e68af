use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Question generation unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Question generation timed out after {0} seconds")]
    GenerationTimeout(u64),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::GenerationUnavailable(_) => "GENERATION_UNAVAILABLE",
            AppError::GenerationTimeout(_) => "GENERATION_TIMEOUT",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Whether asking the generator again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::GenerationUnavailable(_)
                | AppError::GenerationTimeout(_)
                | AppError::MalformedResponse(_)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::GenerationUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerationTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::GenerationUnavailable(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
