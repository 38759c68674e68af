pub mod generation_policy;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod response_parser;
pub mod session_service;
pub mod shuffle_service;

pub use generation_policy::GenerationPolicy;
pub use model_service::{GenerationRequest, OpenAiQuestionGenerator, QuestionGenerator};
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::QuizService;
pub use session_service::{QuestionCheck, SessionService};
