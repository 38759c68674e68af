use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{AttemptReviewDto, AttemptSummaryDto},
};

#[get("/api/attempts")]
async fn list_attempts(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let session = state.session.read().await;
    let summaries: Vec<AttemptSummaryDto> = session
        .attempts()
        .iter()
        .map(AttemptSummaryDto::from)
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/api/attempts/{number}")]
async fn get_attempt(
    state: web::Data<Arc<AppState>>,
    number: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let number = number.into_inner();
    let session = state.session.read().await;
    let attempt = session
        .attempt(number)
        .ok_or_else(|| AppError::NotFound(format!("attempt {} does not exist", number)))?;

    Ok(HttpResponse::Ok().json(AttemptReviewDto::from(attempt)))
}
