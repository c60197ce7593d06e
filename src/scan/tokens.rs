// Token counting for weight fields.
//
// Weights are what make corpus averages honest: a 200-token abstract must
// not pull as hard as a 9,000-token article. Two counts matter downstream:
// alphabetic tokens (Cyrillic/Latin words, intra-word hyphens kept) and all
// tokens including punctuation runs. Punctuation-normalized metrics weight
// by the latter, everything lexical by the former.

use std::collections::BTreeMap;

use regex::Regex;

/// Token totals for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCounts {
    /// Word tokens plus punctuation tokens
    pub all: usize,
    /// Word tokens only (Cyrillic or Latin, hyphenated compounds count once)
    pub alpha: usize,
    /// Punctuation tokens (a run like "?!" counts once)
    pub punct: usize,
}

/// Splits text into word and punctuation tokens.
pub struct Tokenizer {
    word: Regex,
    token: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // A word: letters, optionally joined by single hyphens ("какой-то")
            word: Regex::new(r"[А-Яа-яЁёA-Za-z]+(?:-[А-Яа-яЁёA-Za-z]+)*")
                .expect("word pattern is a valid literal"),
            // A token: a word as above, or a run of non-space non-letters
            token: Regex::new(
                r"[А-Яа-яЁёA-Za-z]+(?:-[А-Яа-яЁёA-Za-z]+)*|[^\sА-Яа-яЁёA-Za-z]+",
            )
            .expect("token pattern is a valid literal"),
        }
    }

    /// Count all/alpha/punct tokens in one pass over the text.
    pub fn counts(&self, text: &str) -> TokenCounts {
        let mut all = 0usize;
        let mut alpha = 0usize;
        for m in self.token.find_iter(text) {
            all += 1;
            if self.word.find(m.as_str()).map(|w| w.len()) == Some(m.len()) {
                alpha += 1;
            }
        }
        TokenCounts {
            all,
            alpha,
            punct: all - alpha,
        }
    }

    /// Word tokens in text order.
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.word.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Occurrences of each punctuation symbol, counted per character so
    /// "..." contributes three to ".".
    pub fn punctuation_counts(&self, text: &str) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for m in self.token.find_iter(text) {
            let token = m.as_str();
            if self.word.find(token).map(|w| w.len()) == Some(token.len()) {
                continue;
            }
            for ch in token.chars() {
                *counts.entry(ch.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_separate_punctuation() {
        let t = Tokenizer::new();
        let counts = t.counts("Пример текста на русском языке! и КАКОЙ-ТО text in English.");
        assert_eq!(counts.alpha, 10);
        assert_eq!(counts.punct, 2);
        assert_eq!(counts.all, 12);
    }

    #[test]
    fn test_hyphenated_word_is_one_token() {
        let t = Tokenizer::new();
        let counts = t.counts("какой-то");
        assert_eq!(counts.alpha, 1);
        assert_eq!(counts.punct, 0);
    }

    #[test]
    fn test_punctuation_run_is_one_token() {
        let t = Tokenizer::new();
        let counts = t.counts("Неужели?!");
        assert_eq!(counts.all, 2);
        assert_eq!(counts.punct, 1);
    }

    #[test]
    fn test_empty_text() {
        let t = Tokenizer::new();
        let counts = t.counts("   ");
        assert_eq!(counts.all, 0);
        assert_eq!(counts.alpha, 0);
    }

    #[test]
    fn test_punctuation_counts_per_character() {
        let t = Tokenizer::new();
        let counts = t.punctuation_counts("Ну... да, да.");
        assert_eq!(counts.get("."), Some(&4));
        assert_eq!(counts.get(","), Some(&1));
    }

    #[test]
    fn test_words_in_order() {
        let t = Tokenizer::new();
        assert_eq!(t.words("да, нет!"), ["да", "нет"]);
    }
}
