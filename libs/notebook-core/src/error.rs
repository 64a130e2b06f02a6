//! Error types for notebook-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Broad category of a failure, shared by every error in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Protected,
    Upstream,
}

/// Errors returned by deck and flashcard repositories.
///
/// A failing operation never leaves the store partially mutated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("deck name must not be empty")]
    EmptyName,

    #[error("deck already exists: {0}")]
    DeckExists(String),

    #[error("deck not found: {0}")]
    DeckNotFound(String),

    #[error("deck name already in use: {0}")]
    NameConflict(String),

    #[error("deck {0} is protected")]
    ProtectedDeck(String),

    #[error("flashcard not found: {0}")]
    CardNotFound(Uuid),

    #[error("flashcard {id} is already tagged {tag}")]
    AlreadyTagged { id: Uuid, tag: String },

    #[error("flashcard {id} has no tag {tag}")]
    TagMissing { id: Uuid, tag: String },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName => ErrorKind::Validation,
            Self::DeckNotFound(_) | Self::CardNotFound(_) => ErrorKind::NotFound,
            Self::DeckExists(_)
            | Self::NameConflict(_)
            | Self::AlreadyTagged { .. }
            | Self::TagMissing { .. } => ErrorKind::Conflict,
            Self::ProtectedDeck(_) => ErrorKind::Protected,
        }
    }
}

/// Errors from text extraction and from validating collaborator output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no text provided")]
    EmptyInput,

    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::Validation,
            Self::Upstream(_) | Self::MalformedResponse(_) => ErrorKind::Upstream,
        }
    }
}
