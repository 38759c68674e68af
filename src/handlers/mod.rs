pub mod attempt_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{
    error::{JsonPayloadError, PathError},
    web, HttpRequest,
};

use crate::errors::AppError;

pub use attempt_handler::{get_attempt, list_attempts};
pub use health_handler::{health_check, list_models};
pub use quiz_handler::{check_answers, check_question, generate_quiz, get_current_quiz};

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(err.to_string()).into()
}

/// Registers every route of the service. Extractor failures are reported
/// through [`AppError`] like any other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(health_check)
        .service(list_models)
        .service(generate_quiz)
        .service(get_current_quiz)
        .service(check_question)
        .service(check_answers)
        .service(list_attempts)
        .service(get_attempt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::app_state::AppState;
    use crate::config::Config;
    use crate::services::model_service::MockQuestionGenerator;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn state() -> Arc<AppState> {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate().times(0);
        Arc::new(AppState::with_generator(Config::test_config(), Arc::new(mock)))
    }

    #[actix_web::test]
    async fn undeserializable_body_is_invalid_input() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes")
            .set_json(json!({"topic": "History", "difficulty": "Medium", "num_questions": "three"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "INVALID_INPUT");
        assert_eq!(body["code"], 400);
    }

    #[actix_web::test]
    async fn non_numeric_path_is_invalid_input() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/attempts/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "INVALID_INPUT");
    }
}
