//! Request bodies and sample notes shared by the API tests.

use serde_json::{json, Value};

/// Notes with `num_cards` marked question/answer pairs.
pub fn sample_notes(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("Q: Question {}?\nA: Answer {}.", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn deck_name(name: &str) -> Value {
    json!({ "name": name })
}

pub fn new_flashcard(question: &str, answer: &str, deck: Option<&str>, tags: &[&str]) -> Value {
    json!({
        "question": question,
        "answer": answer,
        "deck": deck,
        "tags": tags,
    })
}

pub fn tag(tag: &str) -> Value {
    json!({ "tag": tag })
}

pub fn score(score: &str) -> Value {
    json!({ "score": score })
}

pub fn extract_request(text: &str, deck: Option<&str>) -> Value {
    json!({ "text": text, "deck": deck })
}

/// A few bytes standing in for an image; the fake OCR never decodes them.
pub fn image_bytes(len: usize) -> Vec<u8> {
    vec![0x89; len]
}
