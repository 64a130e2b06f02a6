//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from notebook-core
pub use notebook_core::types::{CandidateCard, Deck, Flashcard, QaPair, SearchFilter, DEFAULT_DECK};

// Deck types
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckNameRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// Flashcard types
#[derive(Debug, Serialize, Deserialize)]
pub struct AddFlashcardRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub deck: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagRequest {
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub score: String,
}

// Extraction types
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
    /// When set, extracted pairs are saved into this deck.
    pub deck: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub input_text: String,
    pub flashcards: Vec<QaPair>,
    pub total_flashcards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<Vec<Flashcard>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file_size: usize,
    pub extracted_text: String,
    pub flashcards: Vec<QaPair>,
    pub total_flashcards: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SemanticUploadResponse {
    pub success: bool,
    pub file_size: usize,
    pub extracted_text: String,
    pub semantic_flashcards: Vec<CandidateCard>,
    pub total_semantic_flashcards: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<CandidateCard>,
}

// Health types
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub ocr_available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub ocr_processor_available: bool,
    pub question_generator_available: bool,
    pub supported_image_types: Vec<String>,
}
