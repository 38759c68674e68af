use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::QuizParameters,
        dto::{
            request::{CheckAnswersRequestDto, CheckQuestionRequestDto, GenerateQuizRequestDto},
            response::{
                ApiResponse, CheckAnswersResponse, CheckQuestionResponse, QuestionFeedbackDto,
                QuizView,
            },
        },
    },
    services::session_service::SessionService,
};

fn no_active_quiz() -> AppError {
    AppError::NotFound("no active quiz; generate one first".to_string())
}

#[post("/api/quizzes")]
async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let params = QuizParameters::try_from(request.into_inner())?;

    // The session lock is only taken once generation has finished.
    let mut rng = StdRng::from_entropy();
    let question_set = state.quiz_service.generate(&params, &mut rng).await?;

    let mut session = state.session.write().await;
    session.start_quiz(question_set, Utc::now());
    let view = session
        .current_quiz()
        .map(QuizView::from)
        .ok_or_else(no_active_quiz)?;

    let message = format!(
        "Generated {} {} questions on {}",
        view.question_count, view.difficulty, view.topic
    );
    Ok(HttpResponse::Created().json(ApiResponse {
        data: view,
        message,
    }))
}

#[get("/api/quizzes/current")]
async fn get_current_quiz(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let session = state.session.read().await;
    let view = session
        .current_quiz()
        .map(QuizView::from)
        .ok_or_else(no_active_quiz)?;

    Ok(HttpResponse::Ok().json(view))
}

/// `number` is the 1-based question number shown to the user.
#[post("/api/quizzes/current/questions/{number}/check")]
async fn check_question(
    state: web::Data<Arc<AppState>>,
    number: web::Path<usize>,
    request: web::Json<CheckQuestionRequestDto>,
) -> Result<HttpResponse, AppError> {
    let number = number.into_inner();
    let index = number
        .checked_sub(1)
        .ok_or_else(|| AppError::NotFound("question numbers start at 1".to_string()))?;

    let mut session = state.session.write().await;
    let check = SessionService::check_question(
        &mut session,
        index,
        request.into_inner().selected,
        Utc::now(),
    )?;

    Ok(HttpResponse::Ok().json(CheckQuestionResponse {
        feedback: QuestionFeedbackDto::new(check.number, &check.question, &check.outcome),
        answered_count: check.answered_count,
        question_count: check.question_count,
        completed: check.completed,
        elapsed_seconds: check.elapsed_ms.map(|ms| ms / 1000),
    }))
}

#[post("/api/quizzes/current/check")]
async fn check_answers(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CheckAnswersRequestDto>,
) -> Result<HttpResponse, AppError> {
    let mut session = state.session.write().await;
    let attempt =
        SessionService::check_answers(&mut session, request.into_inner().selections, Utc::now())?;

    Ok(HttpResponse::Ok().json(CheckAnswersResponse::from(&attempt)))
}
