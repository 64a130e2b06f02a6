//! Extraction endpoints: raw text, image uploads and question generation

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use notebook_core::{require_text, FlashcardRepository};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::generator;
use crate::services::ocr::validate_upload;
use crate::services::{OcrEngine, SemanticExtractor};
use crate::AppState;

/// POST /api/extract
pub async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>> {
    require_text(&request.text)?;

    let flashcards = notebook_core::extract(&request.text);

    let saved = match request.deck.as_deref() {
        Some(deck) => {
            let saved = state.store.write().await.import_pairs(deck, &flashcards)?;
            tracing::info!("Imported {} flashcards into deck {}", saved.len(), deck);
            Some(saved)
        }
        None => None,
    };

    Ok(Json(ExtractResponse {
        success: true,
        total_flashcards: flashcards.len(),
        input_text: request.text,
        flashcards,
        saved,
    }))
}

/// Validate an uploaded image and run it through the OCR engine.
async fn recognize_upload(state: &AppState, headers: &HeaderMap, body: &Bytes) -> Result<String> {
    let ocr = state
        .ocr
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("OCR processor not available".to_string()))?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    validate_upload(content_type, body.len(), state.config.max_upload_bytes)?;

    tracing::info!("Processing uploaded image ({} bytes)", body.len());

    ocr.recognize(body).await.into_text().map_err(|e| {
        tracing::warn!("OCR failed: {}", e);
        e
    })
}

/// POST /api/upload
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>> {
    let extracted_text = recognize_upload(&state, &headers, &body).await?;
    let flashcards = notebook_core::extract(&extracted_text);

    Ok(Json(UploadResponse {
        success: true,
        file_size: body.len(),
        extracted_text,
        total_flashcards: flashcards.len(),
        flashcards,
    }))
}

/// POST /api/upload/semantic
pub async fn upload_semantic(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SemanticUploadResponse>> {
    let extracted_text = recognize_upload(&state, &headers, &body).await?;
    let semantic_flashcards = state.semantic.extract(&extracted_text).await.map_err(|e| {
        tracing::warn!("Semantic extraction failed: {}", e);
        e
    })?;

    Ok(Json(SemanticUploadResponse {
        success: true,
        file_size: body.len(),
        extracted_text,
        total_semantic_flashcards: semantic_flashcards.len(),
        semantic_flashcards,
    }))
}

/// POST /api/generate-questions
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>> {
    require_text(&request.text)?;

    let question_generator = state
        .generator
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("Question generator not available".to_string()))?;

    let questions = generator::generate_questions(question_generator.as_ref(), &request.text)
        .await
        .map_err(|e| {
            tracing::warn!("Question generation failed: {}", e);
            e
        })?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}
