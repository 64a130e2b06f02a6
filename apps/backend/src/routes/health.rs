//! Health endpoints

use axum::{extract::State, Json};

use crate::models::{HealthResponse, RootResponse};
use crate::services::ocr::SUPPORTED_IMAGE_TYPES;
use crate::AppState;

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Notebook Vision API".to_string(),
        status: "running".to_string(),
        ocr_available: state.ocr.is_some(),
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ocr_processor_available: state.ocr.is_some(),
        question_generator_available: state.generator.is_some(),
        supported_image_types: SUPPORTED_IMAGE_TYPES.iter().map(|t| t.to_string()).collect(),
    })
}
