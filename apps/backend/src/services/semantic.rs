//! Semantic extraction collaborator.

use async_trait::async_trait;
use notebook_core::{CandidateCard, ExtractError, RuleBasedExtractor};

/// Produces flashcard candidates from free text, independent of the scanner.
#[async_trait]
pub trait SemanticExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<CandidateCard>, ExtractError>;
}

#[async_trait]
impl SemanticExtractor for RuleBasedExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<CandidateCard>, ExtractError> {
        Ok(RuleBasedExtractor::extract(self, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_based_extractor_as_collaborator() {
        let extractor: Box<dyn SemanticExtractor> = Box::new(RuleBasedExtractor::new());
        let cards = tokio_test::block_on(extractor.extract("Osmosis: movement of water")).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "What is Osmosis?");
    }
}
