//! Line classification for question/answer extraction.
//!
//! Markers are matched case-insensitively at the start of the trimmed line:
//!
//! ```text
//! Q: ...   Q. ...   Question: ...   Q1: ...   Q2. ...   1. ...   ?...
//! A: ...   A. ...   Answer: ...     Ans: ...  A1: ...   A2. ...
//! ```
//!
//! A line ending in `?` also counts as a question.

use once_cell::sync::Lazy;
use regex::Regex;

static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:q\s*[:.]|question\s*:|q\d+\s*[.:]|\d+\s*\.|\?)").expect("question marker regex")
});

// Same as QUESTION_MARKER minus the bare leading `?`, which is kept as text.
static QUESTION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:q\s*[:.]|question\s*:|q\d+\s*[.:]|\d+\s*\.)").expect("question prefix regex")
});

static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:a\s*[:.]|answer\s*:|ans\s*:|a\d+\s*[.:])").expect("answer marker regex")
});

/// Classification of one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Question,
    Answer,
    Text,
}

/// Classify a line. Question wins when a line is both.
pub fn classify(line: &str) -> LineKind {
    if is_question_line(line) {
        LineKind::Question
    } else if is_answer_line(line) {
        LineKind::Answer
    } else {
        LineKind::Text
    }
}

pub fn is_question_line(line: &str) -> bool {
    let trimmed = line.trim();
    QUESTION_MARKER.is_match(trimmed) || trimmed.ends_with('?')
}

pub fn is_answer_line(line: &str) -> bool {
    ANSWER_MARKER.is_match(line.trim())
}

/// Remove one leading question marker and trim.
///
/// Neither the trailing `?` nor a bare leading `?` is removed.
pub fn strip_question_marker(line: &str) -> String {
    strip(&QUESTION_PREFIX, line)
}

/// Remove one leading answer marker and trim.
pub fn strip_answer_marker(line: &str) -> String {
    strip(&ANSWER_MARKER, line)
}

fn strip(marker: &Regex, line: &str) -> String {
    let trimmed = line.trim();
    match marker.find(trimmed) {
        Some(m) => trimmed[m.end()..].trim().to_string(),
        None => trimmed.to_string(),
    }
}
