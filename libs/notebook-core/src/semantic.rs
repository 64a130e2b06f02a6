//! Rule-based semantic flashcard extraction.
//!
//! Covers the pattern rules only. Entity and dependency based candidates
//! come from an external NLP engine and can be merged in with
//! [`dedup_cards`](crate::types::dedup_cards).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{dedup_cards, CandidateCard};

/// Terms with this many words or more are not treated as definitions.
pub const MAX_TERM_WORDS: usize = 6;

static INLINE_QA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Q[:.]\s*(.+?)\s*A[:.]\s*([^\n]+)").expect("inline qa regex"));

static DEFINITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.+?):\s*(.+)").expect("definition regex"));

/// Extractor for inline `Q: ... A: ...` pairs and `Term: definition` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExtractor;

impl RuleBasedExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule over `text`, returning deduplicated candidates.
    pub fn extract(&self, text: &str) -> Vec<CandidateCard> {
        let mut cards = inline_pairs(text);
        cards.extend(definitions(text));
        dedup_cards(cards)
    }
}

fn inline_pairs(text: &str) -> Vec<CandidateCard> {
    INLINE_QA
        .captures_iter(text)
        .filter_map(|caps| {
            let question = caps.get(1)?.as_str().trim();
            let answer = caps.get(2)?.as_str().trim();
            (!question.is_empty() && !answer.is_empty()).then(|| CandidateCard::new(question, answer, "qa"))
        })
        .collect()
}

fn definitions(text: &str) -> Vec<CandidateCard> {
    DEFINITION
        .captures_iter(text)
        .filter_map(|caps| {
            let term = caps.get(1)?.as_str().trim();
            let definition = caps.get(2)?.as_str().trim();
            if term.is_empty() || definition.is_empty() || term.split_whitespace().count() >= MAX_TERM_WORDS {
                return None;
            }
            Some(CandidateCard::new(format!("What is {}?", term), definition, "definition"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_qa_across_lines() {
        let cards = inline_pairs("Q: What is Rust?\nA: A language\nmore text");
        assert_eq!(cards, vec![CandidateCard::new("What is Rust?", "A language", "qa")]);
    }

    #[test]
    fn inline_qa_on_one_line() {
        let cards = inline_pairs("Q. Two plus two A. Four");
        assert_eq!(cards, vec![CandidateCard::new("Two plus two", "Four", "qa")]);
    }

    #[test]
    fn definitions_need_short_terms() {
        let cards = definitions("Mitochondria: powerhouse of the cell\nthis term has far too many words: ignored");
        assert_eq!(
            cards,
            vec![CandidateCard::new("What is Mitochondria?", "powerhouse of the cell", "definition")]
        );
    }

    #[test]
    fn extract_combines_rules() {
        let cards = RuleBasedExtractor::new().extract("Q: Capital of France?\nA: Paris");
        assert_eq!(cards[0], CandidateCard::new("Capital of France?", "Paris", "qa"));
        assert!(cards.iter().any(|c| c.kind == "definition"));
    }

    #[test]
    fn extract_without_patterns_is_empty() {
        assert!(RuleBasedExtractor::new().extract("no colons or markers here").is_empty());
    }

    #[test]
    fn dedup_is_case_insensitive_and_keeps_first() {
        let cards = dedup_cards(vec![
            CandidateCard::new("What is DNA?", "Genetic code", "definition"),
            CandidateCard::new("what is dna?", "GENETIC CODE", "qa"),
            CandidateCard::new("What is RNA?", "Messenger", "definition"),
        ]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].kind, "definition");
    }
}
