//! HTTP route handlers

pub mod decks;
pub mod extract;
pub mod flashcards;
pub mod health;
