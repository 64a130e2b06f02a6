//! Deck and flashcard repositories.
//!
//! The traits describe the store contract so a persistent backend can stand
//! in for [`MemoryStore`] without touching callers.

mod memory;

pub use memory::MemoryStore;

use uuid::Uuid;

use crate::error::Result;
use crate::types::{Deck, Flashcard, QaPair, SearchFilter};

/// Repository for deck operations.
pub trait DeckRepository {
    /// Create a deck. The name is trimmed and must be non-empty and unused.
    fn create_deck(&mut self, name: &str) -> Result<Deck>;

    /// Rename a deck, moving every flashcard that references it.
    fn rename_deck(&mut self, old_name: &str, new_name: &str) -> Result<Deck>;

    /// Delete a deck, moving its flashcards to the default deck.
    /// Returns how many flashcards moved.
    fn delete_deck(&mut self, name: &str) -> Result<usize>;

    fn get_deck(&self, name: &str) -> Option<Deck>;

    /// All decks in creation order.
    fn list_decks(&self) -> Vec<Deck>;
}

/// Repository for flashcard operations.
pub trait FlashcardRepository {
    /// Add a flashcard. `deck` defaults to the default deck and is not
    /// checked for existence.
    fn add_flashcard(&mut self, question: &str, answer: &str, deck: Option<&str>, tags: Vec<String>) -> Flashcard;

    fn get_flashcard(&self, id: Uuid) -> Result<Flashcard>;

    fn tag_flashcard(&mut self, id: Uuid, tag: &str) -> Result<()>;

    fn untag_flashcard(&mut self, id: Uuid, tag: &str) -> Result<()>;

    /// Make `score` current and append it to the history.
    fn update_assessment(&mut self, id: Uuid, score: &str) -> Result<()>;

    /// Snapshots of every flashcard matching `filter`, in insertion order.
    fn search(&self, filter: &SearchFilter) -> Vec<Flashcard>;

    /// Persist extracted pairs into an existing deck.
    fn import_pairs(&mut self, deck: &str, pairs: &[QaPair]) -> Result<Vec<Flashcard>>;
}

/// Both repositories behind one object, shareable across threads.
pub trait Repository: DeckRepository + FlashcardRepository + Send + Sync {}

impl<T> Repository for T where T: DeckRepository + FlashcardRepository + Send + Sync {}
