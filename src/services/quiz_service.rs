use std::sync::Arc;

use rand::Rng;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, QuestionSet, QuizParameters},
    services::{
        generation_policy::GenerationPolicy,
        model_service::{GenerationRequest, QuestionGenerator},
        response_parser,
        shuffle_service::shuffle_question_set,
    },
};

pub struct QuizService {
    generator: Arc<dyn QuestionGenerator>,
    policy: GenerationPolicy,
}

impl QuizService {
    pub fn new(generator: Arc<dyn QuestionGenerator>, policy: GenerationPolicy) -> Self {
        Self { generator, policy }
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    /// Validates the raw inputs, then generates a quiz. Nothing is sent to the
    /// generator when the inputs are invalid.
    pub async fn generate_quiz<R: Rng + Send + ?Sized>(
        &self,
        topic: &str,
        difficulty: Difficulty,
        num_questions: usize,
        rng: &mut R,
    ) -> AppResult<QuestionSet> {
        let params = QuizParameters::new(topic, difficulty, num_questions)?;
        self.generate(&params, rng).await
    }

    /// Generates, validates and shuffles a question set ready for display.
    pub async fn generate<R: Rng + Send + ?Sized>(
        &self,
        params: &QuizParameters,
        rng: &mut R,
    ) -> AppResult<QuestionSet> {
        log::info!(
            "Generating {} {} questions on '{}'",
            params.num_questions(),
            params.difficulty(),
            params.topic()
        );

        let request = GenerationRequest::for_parameters(params);
        let mut question_set = self.generate_with_retries(&request, params).await?;
        shuffle_question_set(&mut question_set, rng);

        log::info!(
            "Generated {} questions on '{}'",
            question_set.len(),
            question_set.topic
        );
        Ok(question_set)
    }

    async fn generate_with_retries(
        &self,
        request: &GenerationRequest,
        params: &QuizParameters,
    ) -> AppResult<QuestionSet> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            match self.generate_once(request, params).await {
                Ok(question_set) => return Ok(question_set),
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    let delay = self.policy.backoff(attempt);
                    log::warn!(
                        "Generation attempt {}/{} failed: {}; retrying in {:?}",
                        attempt,
                        max_attempts,
                        err,
                        delay
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
                Err(err) => {
                    log::error!(
                        "Generation failed after {} attempt(s): {}",
                        attempt,
                        err
                    );
                    return Err(err);
                }
            }
        }
    }

    async fn generate_once(
        &self,
        request: &GenerationRequest,
        params: &QuizParameters,
    ) -> AppResult<QuestionSet> {
        let raw = tokio::time::timeout(self.policy.timeout(), self.generator.generate(request))
            .await
            .map_err(|_| AppError::GenerationTimeout(self.policy.timeout_seconds))??;

        response_parser::parse(&raw, params)
    }
}
