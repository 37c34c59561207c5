//! Shallow grammar and style heuristics.
//!
//! These are word-count and pronoun checks, not a parser of English.

use lazy_static::lazy_static;
use regex::Regex;

/// Documents with fewer whitespace-delimited words than this are flagged.
pub const MIN_WORDS: usize = 100;

/// Issue reported for short documents.
pub const TOO_SHORT: &str = "Document seems too short - typical resumes have 200-500 words";

lazy_static! {
    static ref FIRST_PERSON: Regex = Regex::new(r"(?i)\b(?:I|my|me)\b").unwrap();
}

/// Run the heuristics over flattened text.
pub fn check_grammar(text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    let words = word_count(text);
    if words < MIN_WORDS {
        issues.push(TOO_SHORT.to_string());
    }

    let pronouns = first_person_count(text);
    if pronouns > 0 {
        issues.push(format!(
            "Avoid first-person pronouns (found {} instances) - use professional third-person",
            pronouns
        ));
    }

    log::debug!(
        "Grammar check: {} words, {} first-person pronouns",
        words,
        pronouns
    );
    issues
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Standalone occurrences of I / my / me, any case.
pub fn first_person_count(text: &str) -> usize {
    FIRST_PERSON.find_iter(text).count()
}
