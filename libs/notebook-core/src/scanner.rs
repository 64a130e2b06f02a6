//! Question/answer scanner for recognized note text.
//!
//! # Format
//! ```text
//! Q: What is the capital of France?
//! A: Paris
//!
//! 1. What year was the internet invented?
//!    1969 (ARPANET)
//!
//! What is the largest planet?
//! Jupiter
//! ```
//!
//! The scan runs once, left to right. On a question line it looks at most
//! [`ANSWER_WINDOW`] lines ahead for an answer. An answer marker ends the
//! search after collecting up to [`CONTINUATION_LINES`] follow-on lines;
//! unmarked prose inside the window is collected as the answer as well.

use crate::classifier::{
    classify, is_question_line, strip_answer_marker, strip_question_marker, LineKind,
};
use crate::types::{dedup_cards, QaPair};

/// Lines searched for an answer after a question.
pub const ANSWER_WINDOW: usize = 5;

/// Lines appended after an answer marker line.
pub const CONTINUATION_LINES: usize = 2;

/// Extract ordered, deduplicated question/answer pairs from `text`.
pub fn extract(text: &str) -> Vec<QaPair> {
    dedup_cards(Scanner::new(text).run())
}

struct Scanner<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
        }
    }

    fn run(&self) -> Vec<QaPair> {
        let mut pairs = Vec::new();
        let mut i = 0;

        while i < self.lines.len() {
            if !is_question_line(self.lines[i]) {
                i += 1;
                continue;
            }

            let question = strip_question_marker(self.lines[i]);
            let answer = self.find_answer(i + 1);

            if !question.is_empty() && !answer.is_empty() {
                pairs.push(QaPair { question, answer });
                i = self.next_question_index(i + 1);
            } else {
                i += 1;
            }
        }

        pairs
    }

    fn find_answer(&self, start: usize) -> String {
        let mut parts: Vec<String> = Vec::new();
        let end = (start + ANSWER_WINDOW).min(self.lines.len());

        for idx in start..end {
            let line = self.lines[idx].trim();

            match classify(line) {
                LineKind::Question => break,
                LineKind::Answer => {
                    let cleaned = strip_answer_marker(line);
                    if !cleaned.is_empty() {
                        parts.push(cleaned);
                    }
                    self.collect_continuation(idx + 1, &mut parts);
                    break;
                }
                LineKind::Text if !line.is_empty() => parts.push(line.to_string()),
                LineKind::Text => {}
            }
        }

        parts.join(" ").trim().to_string()
    }

    // A blank line, a question or another answer ends the continuation.
    fn collect_continuation(&self, start: usize, parts: &mut Vec<String>) {
        let end = (start + CONTINUATION_LINES).min(self.lines.len());
        for idx in start..end {
            let line = self.lines[idx].trim();
            if line.is_empty() || classify(line) != LineKind::Text {
                break;
            }
            parts.push(line.to_string());
        }
    }

    fn next_question_index(&self, start: usize) -> usize {
        (start..self.lines.len())
            .find(|&idx| is_question_line(self.lines[idx]))
            .unwrap_or(self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(q: &str, a: &str) -> QaPair {
        QaPair::new(q, a)
    }

    #[test]
    fn extract_marked_pair() {
        assert_eq!(extract("Q: x\nA: y"), vec![pair("x", "y")]);
    }

    #[test]
    fn extract_question_answer_words() {
        let input = "Question: What is photosynthesis?\nAnswer: The process by which plants convert sunlight into energy";
        assert_eq!(
            extract(input),
            vec![pair(
                "What is photosynthesis?",
                "The process by which plants convert sunlight into energy"
            )]
        );
    }

    #[test]
    fn extract_enumerated_question_with_indented_answer() {
        let input = "1. What year was the internet invented?\n   1969 (ARPANET)";
        assert_eq!(
            extract(input),
            vec![pair("What year was the internet invented?", "1969 (ARPANET)")]
        );
    }

    #[test]
    fn plain_prose_yields_nothing() {
        let input = "This is just regular text without any\nquestion and answer patterns.\nIt should not generate any flashcards.";
        assert!(extract(input).is_empty());
    }

    #[test]
    fn standard_format_two_cards() {
        let input = "Q: What is the capital of France?\nA: Paris\n\nQ: When did World War II end?\nA: 1945";
        assert_eq!(
            extract(input),
            vec![
                pair("What is the capital of France?", "Paris"),
                pair("When did World War II end?", "1945"),
            ]
        );
    }

    #[test]
    fn mixed_formats() {
        let input = "Q1: What is machine learning?\nA1: A subset of AI that enables computers to learn\n\nQ2: Name three programming languages\nA2: Python, JavaScript, Java\n\n1. What year was the internet invented?\n   1969 (ARPANET)";
        let pairs = extract(input);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], pair("Name three programming languages", "Python, JavaScript, Java"));
    }

    #[test]
    fn question_mark_format() {
        let input = "What is the largest planet in our solar system?\nJupiter\n\nHow many continents are there?\nSeven continents";
        assert_eq!(
            extract(input),
            vec![
                pair("What is the largest planet in our solar system?", "Jupiter"),
                pair("How many continents are there?", "Seven continents"),
            ]
        );
    }

    #[test]
    fn complex_mixed_format() {
        let input = "Q: What is artificial intelligence?\nA: Technology that enables machines to simulate human intelligence\n\nQuestion: What is the speed of light?\nAnswer: 299,792,458 meters per second\n\nQ3: What is the chemical symbol for water?\nA3: H2O\n\n4. Who painted the Mona Lisa?\n   Leonardo da Vinci\n\nWhat is the largest mammal?\nBlue whale";
        let pairs = extract(input);
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[3], pair("Who painted the Mona Lisa?", "Leonardo da Vinci"));
        assert_eq!(pairs[4], pair("What is the largest mammal?", "Blue whale"));
    }

    #[test]
    fn consecutive_questions_drop_the_first() {
        assert!(extract("Q: What is X?\nQ: What is Y?").is_empty());
        assert_eq!(extract("Q: What is X?\nQ: What is Y?\nA: Y"), vec![pair("What is Y?", "Y")]);
    }

    #[test]
    fn edge_inputs_yield_nothing() {
        for input in ["", "   \n\n   ", "Q: What is this?", "A: This is an answer", "A: Answer 1\nA: Answer 2"] {
            assert!(extract(input).is_empty(), "input {input:?}");
        }
    }

    #[test]
    fn special_characters_in_questions() {
        assert_eq!(extract("Q: What is 2+2=?\nA: 4"), vec![pair("What is 2+2=?", "4")]);
        assert_eq!(extract("Q1: H2O = ?\nA1: Water"), vec![pair("H2O = ?", "Water")]);
    }

    #[test]
    fn answer_marker_collects_two_continuation_lines() {
        let input = "Q: Explain\nA: line one\nline two\nline three\nline four";
        assert_eq!(extract(input), vec![pair("Explain", "line one line two line three")]);
    }

    #[test]
    fn continuation_stops_at_blank_line() {
        let input = "Q: Explain\nA: line one\n\nline three";
        assert_eq!(extract(input), vec![pair("Explain", "line one")]);
    }

    #[test]
    fn prose_before_marker_is_kept() {
        let input = "Q: Explain\nsome prose\nA: marked";
        assert_eq!(extract(input), vec![pair("Explain", "some prose marked")]);
    }

    #[test]
    fn empty_answer_marker_still_takes_continuation() {
        let input = "Q: Explain\nA:\nthe real answer";
        assert_eq!(extract(input), vec![pair("Explain", "the real answer")]);
    }

    #[test]
    fn empty_answer_marker_ends_search() {
        let input = "Q: Explain\nA:\n\nlate prose";
        assert!(extract(input).is_empty());
    }

    #[test]
    fn answer_window_is_five_lines() {
        let input = "Q: Far?\n\n\n\n\n\nA: too far";
        assert!(extract(input).is_empty());
        let input = "Q: Near\n\n\n\n\nA: close";
        assert_eq!(extract(input), vec![pair("Near", "close")]);
    }

    #[test]
    fn blank_lines_do_not_end_search() {
        let input = "What is it?\n\nan answer";
        assert_eq!(extract(input), vec![pair("What is it?", "an answer")]);
    }

    #[test]
    fn failed_question_rescans_next_line() {
        // "Q: lonely" has no answer because the next line is a question.
        let input = "Q: lonely\nWhy?\nBecause";
        assert_eq!(extract(input), vec![pair("Why?", "Because")]);
    }

    #[test]
    fn skips_consumed_lines_until_next_question() {
        let input = "Q: First\nA: one\nstray\nmore\nstill more\nQ: Second\nA: two";
        assert_eq!(extract(input), vec![pair("First", "one stray more"), pair("Second", "two")]);
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        assert_eq!(extract("Q: x\r\nA: y\r\n"), vec![pair("x", "y")]);
    }

    #[test]
    fn duplicates_are_removed_case_insensitively() {
        let input = "Q: Capital of France\nA: Paris\nQ: capital of france\nA: PARIS\nQ: Capital of Spain\nA: Madrid";
        assert_eq!(
            extract(input),
            vec![pair("Capital of France", "Paris"), pair("Capital of Spain", "Madrid")]
        );
    }

    #[test]
    fn extract_is_deterministic() {
        let input = "Q: a\nA: b\n\n2. c\nd";
        assert_eq!(extract(input), extract(input));
    }

    #[test]
    fn answer_marker_ending_in_question_mark_ends_search() {
        // "A: ..?" classifies as a question, so it is not taken as the answer.
        assert!(extract("Q: first\nA: is it?").is_empty());
        assert_eq!(extract("Q: first\nA: it is\nA: really?"), vec![pair("first", "it is")]);
    }
}
