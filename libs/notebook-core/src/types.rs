//! Core types for notebook flashcards.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the deck that always exists and receives orphaned flashcards.
pub const DEFAULT_DECK: &str = "Default";

/// A named grouping of flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One recorded self-grading score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentEntry {
    pub timestamp: DateTime<Utc>,
    pub score: String,
}

/// Latest score plus the append-only history of every score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub current: Option<String>,
    pub history: Vec<AssessmentEntry>,
}

impl Assessment {
    /// Record a score at `at`, making it the current one.
    pub fn record(&mut self, score: impl Into<String>, at: DateTime<Utc>) {
        let score = score.into();
        self.current = Some(score.clone());
        self.history.push(AssessmentEntry { timestamp: at, score });
    }
}

/// Flashcard owned by the store.
///
/// `deck` is a soft reference by name; the store rewrites it when the
/// deck is renamed or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub deck: String,
    /// Unique tags in insertion order.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub assessment: Assessment,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        deck: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }

        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            answer: answer.into(),
            deck: deck.into(),
            tags: unique,
            created_at: now,
            updated_at: now,
            assessment: Assessment::default(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Question/answer pair produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Flashcard-like candidate from semantic extraction or question generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCard {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CandidateCard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            kind: kind.into(),
        }
    }
}

/// Question and answer text of a card-like value.
pub trait CardText {
    fn question(&self) -> &str;
    fn answer(&self) -> &str;
}

impl CardText for QaPair {
    fn question(&self) -> &str {
        &self.question
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

impl CardText for CandidateCard {
    fn question(&self) -> &str {
        &self.question
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

/// Keep the first card of each case-insensitive (question, answer).
pub fn dedup_cards<T: CardText>(cards: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|card| seen.insert((card.question().to_lowercase(), card.answer().to_lowercase())))
        .collect()
}

/// Conjunctive search filter. Absent or empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub query: Option<String>,
    pub deck: Option<String>,
    pub tag: Option<String>,
    pub assessment: Option<String>,
}

impl SearchFilter {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn deck(mut self, deck: impl Into<String>) -> Self {
        self.deck = Some(deck.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn assessment(mut self, assessment: impl Into<String>) -> Self {
        self.assessment = Some(assessment.into());
        self
    }

    /// Whether `card` satisfies every present constraint.
    pub fn matches(&self, card: &Flashcard) -> bool {
        if let Some(query) = active(&self.query) {
            let needle = query.to_lowercase();
            if !card.question.to_lowercase().contains(&needle)
                && !card.answer.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(deck) = active(&self.deck) {
            if card.deck != deck {
                return false;
            }
        }
        if let Some(tag) = active(&self.tag) {
            if !card.has_tag(tag) {
                return false;
            }
        }
        if let Some(assessment) = active(&self.assessment) {
            if card.assessment.current.as_deref() != Some(assessment) {
                return false;
            }
        }
        true
    }
}

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
