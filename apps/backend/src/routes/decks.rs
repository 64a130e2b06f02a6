//! Deck endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use notebook_core::DeckRepository;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/decks
pub async fn list(State(state): State<AppState>) -> Json<Vec<Deck>> {
    let store = state.store.read().await;
    Json(store.list_decks())
}

/// POST /api/decks
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<DeckNameRequest>,
) -> Result<Json<Deck>> {
    let deck = state.store.write().await.create_deck(&request.name)?;
    tracing::info!("Created deck {}", deck.name);
    Ok(Json(deck))
}

/// PUT /api/decks/:name
pub async fn rename(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<DeckNameRequest>,
) -> Result<Json<SuccessResponse>> {
    let deck = state.store.write().await.rename_deck(&name, &request.name)?;
    tracing::info!("Renamed deck {} to {}", name, deck.name);
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/decks/:name
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SuccessResponse>> {
    let moved = state.store.write().await.delete_deck(&name)?;
    tracing::info!("Deleted deck {} ({} flashcards moved to {})", name, moved, DEFAULT_DECK);
    Ok(Json(SuccessResponse::ok()))
}
