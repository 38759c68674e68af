use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::SessionState,
    services::{
        generation_policy::GenerationPolicy,
        model_service::{OpenAiQuestionGenerator, QuestionGenerator},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub session: Arc<RwLock<SessionState>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let generator = Arc::new(OpenAiQuestionGenerator::new(&config));
        log::info!(
            "Question generator ready: model '{}' at {}",
            generator.model(),
            config.llm_api_base
        );

        Ok(Self::with_generator(config, generator))
    }

    /// Builds the state around any generator, e.g. a scripted one in tests.
    pub fn with_generator(config: Config, generator: Arc<dyn QuestionGenerator>) -> Self {
        let policy = GenerationPolicy::from_config(&config);
        let quiz_service = Arc::new(QuizService::new(generator, policy));

        Self {
            quiz_service,
            session: Arc::new(RwLock::new(SessionState::new())),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::model_service::MockQuestionGenerator;
    use secrecy::SecretString;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn new_rejects_missing_api_key() {
        let mut config = Config::test_config();
        config.llm_api_key = SecretString::from(String::new());

        let err = AppState::new(config).err().unwrap();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[actix_rt::test]
    async fn with_generator_starts_with_empty_session() {
        let state = AppState::with_generator(
            Config::test_config(),
            Arc::new(MockQuestionGenerator::new()),
        );

        let session = state.session.read().await;
        assert!(session.current_quiz().is_none());
        assert!(session.attempts().is_empty());
        assert_eq!(state.quiz_service.policy().max_retries, 0);
    }
}
