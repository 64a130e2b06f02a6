//! In-memory implementation of the repositories.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{DeckRepository, FlashcardRepository};
use crate::error::{Result, StoreError};
use crate::types::{Deck, Flashcard, QaPair, SearchFilter, DEFAULT_DECK};

/// Store owning every deck and flashcard.
///
/// Methods that mutate take `&mut self`; callers sharing a store across
/// threads wrap it in a single lock so rename and delete rewrites are
/// never observed half done.
#[derive(Debug)]
pub struct MemoryStore {
    decks: HashMap<Uuid, Deck>,
    deck_names: HashMap<String, Uuid>,
    deck_order: Vec<Uuid>,
    cards: HashMap<Uuid, Flashcard>,
    card_order: Vec<Uuid>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a store holding only the default deck.
    pub fn new() -> Self {
        let mut store = Self {
            decks: HashMap::new(),
            deck_names: HashMap::new(),
            deck_order: Vec::new(),
            cards: HashMap::new(),
            card_order: Vec::new(),
        };
        store.insert_deck(Deck::new(DEFAULT_DECK));
        store
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn insert_deck(&mut self, deck: Deck) -> Deck {
        self.deck_names.insert(deck.name.clone(), deck.id);
        self.deck_order.push(deck.id);
        self.decks.insert(deck.id, deck.clone());
        deck
    }

    fn insert_card(&mut self, card: Flashcard) -> Flashcard {
        self.card_order.push(card.id);
        self.cards.insert(card.id, card.clone());
        card
    }

    fn card_mut(&mut self, id: Uuid) -> Result<&mut Flashcard> {
        self.cards.get_mut(&id).ok_or(StoreError::CardNotFound(id))
    }

    // Single place where soft deck references are rewritten. Cannot fail.
    fn reassign_cards(&mut self, from: &str, to: &str) -> usize {
        let mut moved = 0;
        for card in self.cards.values_mut().filter(|c| c.deck == from) {
            card.deck = to.to_string();
            moved += 1;
        }
        tracing::debug!(from, to, moved, "reassigned flashcards");
        moved
    }
}

fn clean_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(trimmed)
}

impl DeckRepository for MemoryStore {
    fn create_deck(&mut self, name: &str) -> Result<Deck> {
        let name = clean_name(name)?;
        if self.deck_names.contains_key(name) {
            return Err(StoreError::DeckExists(name.to_string()));
        }
        Ok(self.insert_deck(Deck::new(name)))
    }

    fn rename_deck(&mut self, old_name: &str, new_name: &str) -> Result<Deck> {
        let new_name = clean_name(new_name)?;
        if old_name == DEFAULT_DECK {
            return Err(StoreError::ProtectedDeck(old_name.to_string()));
        }
        let id = *self
            .deck_names
            .get(old_name)
            .ok_or_else(|| StoreError::DeckNotFound(old_name.to_string()))?;
        // The old entry is still indexed here, so a self-rename conflicts too.
        if self.deck_names.contains_key(new_name) {
            return Err(StoreError::NameConflict(new_name.to_string()));
        }

        let deck = self.decks.get_mut(&id).ok_or_else(|| StoreError::DeckNotFound(old_name.to_string()))?;
        deck.name = new_name.to_string();
        deck.updated_at = Utc::now();
        let renamed = deck.clone();

        self.deck_names.remove(old_name);
        self.deck_names.insert(new_name.to_string(), id);
        self.reassign_cards(old_name, new_name);
        Ok(renamed)
    }

    fn delete_deck(&mut self, name: &str) -> Result<usize> {
        if name == DEFAULT_DECK {
            return Err(StoreError::ProtectedDeck(name.to_string()));
        }
        let id = self
            .deck_names
            .remove(name)
            .ok_or_else(|| StoreError::DeckNotFound(name.to_string()))?;

        self.decks.remove(&id);
        self.deck_order.retain(|d| *d != id);
        Ok(self.reassign_cards(name, DEFAULT_DECK))
    }

    fn get_deck(&self, name: &str) -> Option<Deck> {
        self.deck_names.get(name).and_then(|id| self.decks.get(id)).cloned()
    }

    fn list_decks(&self) -> Vec<Deck> {
        self.deck_order
            .iter()
            .filter_map(|id| self.decks.get(id))
            .cloned()
            .collect()
    }
}

impl FlashcardRepository for MemoryStore {
    fn add_flashcard(&mut self, question: &str, answer: &str, deck: Option<&str>, tags: Vec<String>) -> Flashcard {
        let deck = deck.filter(|d| !d.is_empty()).unwrap_or(DEFAULT_DECK);
        self.insert_card(Flashcard::new(question, answer, deck, tags))
    }

    fn get_flashcard(&self, id: Uuid) -> Result<Flashcard> {
        self.cards.get(&id).cloned().ok_or(StoreError::CardNotFound(id))
    }

    fn tag_flashcard(&mut self, id: Uuid, tag: &str) -> Result<()> {
        let card = self.card_mut(id)?;
        if card.has_tag(tag) {
            return Err(StoreError::AlreadyTagged { id, tag: tag.to_string() });
        }
        card.tags.push(tag.to_string());
        card.updated_at = Utc::now();
        Ok(())
    }

    fn untag_flashcard(&mut self, id: Uuid, tag: &str) -> Result<()> {
        let card = self.card_mut(id)?;
        let Some(pos) = card.tags.iter().position(|t| t == tag) else {
            return Err(StoreError::TagMissing { id, tag: tag.to_string() });
        };
        card.tags.remove(pos);
        card.updated_at = Utc::now();
        Ok(())
    }

    fn update_assessment(&mut self, id: Uuid, score: &str) -> Result<()> {
        let card = self.card_mut(id)?;
        let now = Utc::now();
        card.assessment.record(score, now);
        card.updated_at = now;
        Ok(())
    }

    fn search(&self, filter: &SearchFilter) -> Vec<Flashcard> {
        self.card_order
            .iter()
            .filter_map(|id| self.cards.get(id))
            .filter(|card| filter.matches(card))
            .cloned()
            .collect()
    }

    fn import_pairs(&mut self, deck: &str, pairs: &[QaPair]) -> Result<Vec<Flashcard>> {
        if !self.deck_names.contains_key(deck) {
            return Err(StoreError::DeckNotFound(deck.to_string()));
        }
        Ok(pairs
            .iter()
            .map(|pair| self.insert_card(Flashcard::new(&pair.question, &pair.answer, deck, Vec::new())))
            .collect())
    }
}
