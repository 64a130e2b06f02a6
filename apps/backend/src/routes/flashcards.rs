//! Flashcard endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use notebook_core::FlashcardRepository;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::BadRequest(message.to_string()));
    }
    Ok(value)
}

/// POST /api/flashcards
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddFlashcardRequest>,
) -> Result<Json<Flashcard>> {
    let question = required(&request.question, "Question and answer required.")?;
    let answer = required(&request.answer, "Question and answer required.")?;

    let card = state.store.write().await.add_flashcard(
        question,
        answer,
        request.deck.as_deref(),
        request.tags,
    );
    Ok(Json(card))
}

/// GET /api/flashcards
pub async fn search(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> Json<Vec<Flashcard>> {
    let store = state.store.read().await;
    Json(store.search(&filter))
}

/// GET /api/flashcards/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Flashcard>> {
    let card = state.store.read().await.get_flashcard(id)?;
    Ok(Json(card))
}

/// POST /api/flashcards/:id/tag
pub async fn tag(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TagRequest>,
) -> Result<Json<SuccessResponse>> {
    let tag = required(&request.tag, "Tag required.")?;
    state.store.write().await.tag_flashcard(id, tag)?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/flashcards/:id/untag
pub async fn untag(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TagRequest>,
) -> Result<Json<SuccessResponse>> {
    let tag = required(&request.tag, "Tag required.")?;
    state.store.write().await.untag_flashcard(id, tag)?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/flashcards/:id/assessment
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<SuccessResponse>> {
    let score = required(&request.score, "Score required.")?;
    state.store.write().await.update_assessment(id, score)?;
    Ok(Json(SuccessResponse::ok()))
}
