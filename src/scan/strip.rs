// Marker and stopword removal.
//
// Multi-word markers must leave the text as atomic units: once
// "таким образом" is removed, neither "таким" nor "образом" may be counted
// again by any later pass. Longest-first ordering in a single alternation
// guarantees that, because the regex engine prefers earlier alternatives.

use std::collections::HashSet;

use regex::Regex;

use super::tokens::Tokenizer;

/// Compile one boundary-anchored alternation over the given markers,
/// longest first. Returns None when there is nothing to match.
///
/// Sorting happens here, never at the call site; a caller-supplied order
/// is not trusted (a shorter marker listed first would shadow its longer
/// variants).
pub(crate) fn marker_pattern<S: AsRef<str>>(markers: &[S]) -> Option<Regex> {
    let mut sorted: Vec<&str> = markers
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| !m.is_empty())
        .collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        len_b.cmp(&len_a).then_with(|| a.cmp(b))
    });
    sorted.dedup();

    let alternation = sorted
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    // Escaped literals always compile
    Some(Regex::new(&format!(r"\b(?:{alternation})\b")).expect("escaped alternation is valid"))
}

/// Remove every marker occurrence from the text.
///
/// Case-folds, removes matches longest-first, collapses the remaining
/// whitespace. Returns the cleaned text and how many phrases were removed.
pub fn strip_markers<S: AsRef<str>>(text: &str, markers: &[S]) -> (String, usize) {
    let lowered = text.to_lowercase();
    let Some(pattern) = marker_pattern(markers) else {
        return (collapse_whitespace(&lowered), 0);
    };

    let removed = pattern.find_iter(&lowered).count();
    let stripped = pattern.replace_all(&lowered, " ");
    (collapse_whitespace(&stripped), removed)
}

/// Drop stopword tokens from the text, keeping only word tokens.
///
/// Returns the surviving words joined by single spaces and the number of
/// stopword tokens dropped. The input is expected to be lowercase already
/// (stopword lists are lowercase).
pub fn remove_stopwords(text: &str, stopwords: &HashSet<String>) -> (String, usize) {
    let tokenizer = Tokenizer::new();
    let mut kept: Vec<&str> = Vec::new();
    let mut removed = 0usize;
    for word in tokenizer.words(text) {
        if stopwords.contains(word) {
            removed += 1;
        } else {
            kept.push(word);
        }
    }
    (kept.join(" "), removed)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
