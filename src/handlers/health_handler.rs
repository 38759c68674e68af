use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    constants::models::SUPPORTED_MODELS,
    models::dto::response::ModelsResponse,
};

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/api/models")]
async fn list_models(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(ModelsResponse {
        configured_model: state.config.llm_model.clone(),
        models: SUPPORTED_MODELS,
    })
}
