//! Core library for turning notes into flashcards.
//!
//! Provides:
//! - Line classification and the question/answer scanner
//! - Rule-based semantic extraction
//! - Validation of generated question lists
//! - Deck and flashcard repositories with an in-memory store
//! - Shared types (Deck, Flashcard, Assessment, QaPair, etc.)

pub mod candidates;
pub mod classifier;
pub mod error;
pub mod scanner;
pub mod semantic;
pub mod store;
pub mod types;

pub use candidates::{require_text, validate_generated};
pub use classifier::{classify, is_answer_line, is_question_line, strip_answer_marker, strip_question_marker, LineKind};
pub use error::{ErrorKind, ExtractError, Result, StoreError};
pub use scanner::extract;
pub use semantic::RuleBasedExtractor;
pub use store::{DeckRepository, FlashcardRepository, MemoryStore, Repository};
pub use types::{
    dedup_cards, Assessment, AssessmentEntry, CandidateCard, CardText, Deck, Flashcard, QaPair, SearchFilter,
    DEFAULT_DECK,
};
