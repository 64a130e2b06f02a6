//! Question generation collaborator.
//!
//! Generators return their raw JSON; validation happens here so a
//! malformed response fails the request instead of leaking through.

use async_trait::async_trait;
use notebook_core::{require_text, validate_generated, CandidateCard, ExtractError};
use serde_json::Value;

/// Produces a JSON array of `{type, question, answer}` objects from notes.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, notes: &str) -> Result<Value, ExtractError>;
}

/// Generate and validate questions for `notes`. Not retried on failure.
pub async fn generate_questions(
    generator: &dyn QuestionGenerator,
    notes: &str,
) -> Result<Vec<CandidateCard>, ExtractError> {
    let notes = require_text(notes)?;
    let raw = generator.generate(notes).await?;
    validate_generated(raw)
}
