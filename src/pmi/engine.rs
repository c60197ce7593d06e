// Pointwise mutual information over sentence-scoped lemma bigrams.
//
// Bigrams never cross a sentence boundary. Counts accumulate over the
// whole document set, then PMI(w1,w2) = log2(p(w1,w2) / (p(w1)·p(w2))).
// Both probabilities are normalized by N, the total unigram count,
// including the bigram probability. That is nonstandard (a separate
// bigram total would be conventional) but every downstream indicator was
// calibrated against this convention, so it stays.
//
// Only bigrams with PMI > 0 are kept. The share of positive bigrams is
// itself an indicator: translated text tends to form fewer strong
// collocations.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{Lemmatizer, SurfaceLemmatizer};

/// One collocation with its association strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmiEntry {
    pub first: String,
    pub second: String,
    pub pmi: f64,
}

/// All positive-PMI bigrams of a document set, sorted descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PmiTable {
    pub entries: Vec<PmiEntry>,
    /// Number of bigrams with PMI > 0 (entries.len(), kept explicit for
    /// the record/report layer)
    pub positive_count: usize,
    /// positive_count over all distinct bigrams; 0.0 when no bigrams exist
    pub positive_ratio: f64,
    /// Distinct bigrams observed, positive or not
    pub distinct_bigrams: usize,
}

impl PmiTable {
    /// Entries above a display threshold. A pure filter; nothing is
    /// recomputed, so the caller can re-slice at will.
    pub fn above(&self, min_pmi: f64) -> Vec<&PmiEntry> {
        self.entries.iter().filter(|e| e.pmi > min_pmi).collect()
    }

    /// PMI for one pair, if it made the table.
    pub fn get(&self, first: &str, second: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.first == first && e.second == second)
            .map(|e| e.pmi)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bigram association scoring over raw texts.
pub struct PmiEngine<L: Lemmatizer> {
    lemmatizer: L,
    cleanup: Regex,
    sentence_end: Regex,
}

impl PmiEngine<SurfaceLemmatizer> {
    /// Engine with the built-in identity lemmatizer.
    pub fn surface() -> Self {
        Self::new(SurfaceLemmatizer)
    }
}

impl<L: Lemmatizer> PmiEngine<L> {
    pub fn new(lemmatizer: L) -> Self {
        Self {
            lemmatizer,
            // Letters, whitespace, sentence punctuation, and intra-word
            // hyphens survive; everything else is noise for collocation
            cleanup: Regex::new(r"[^а-яёa-z\s.!?-]").expect("cleanup pattern is a valid literal"),
            sentence_end: Regex::new(r"[.!?]+").expect("sentence pattern is a valid literal"),
        }
    }

    /// Lowercase, drop non-lexical characters, split into sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.cleanup.replace_all(&lowered, "");
        self.sentence_end
            .split(&cleaned)
            .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Count unigrams and sentence-scoped bigrams over the documents and
    /// score every bigram. Degenerate input (no tokens, no bigrams) yields
    /// an empty table, never an error.
    pub fn compute<S: AsRef<str>>(&self, documents: &[S]) -> PmiTable {
        let mut unigrams: HashMap<String, u64> = HashMap::new();
        let mut bigrams: HashMap<(String, String), u64> = HashMap::new();

        for document in documents {
            for sentence in self.split_sentences(document.as_ref()) {
                let lemmas = self.lemmatizer.lemmatize(&sentence);
                for lemma in &lemmas {
                    *unigrams.entry(lemma.clone()).or_insert(0) += 1;
                }
                // Sentences shorter than two lemmas contribute no bigrams
                for pair in lemmas.windows(2) {
                    *bigrams
                        .entry((pair[0].clone(), pair[1].clone()))
                        .or_insert(0) += 1;
                }
            }
        }

        let total_unigrams: u64 = unigrams.values().sum();
        if total_unigrams == 0 || bigrams.is_empty() {
            return PmiTable::default();
        }
        let n = total_unigrams as f64;

        let mut entries: Vec<PmiEntry> = Vec::new();
        for ((first, second), count) in &bigrams {
            // Bigram probability over the unigram total; see module header
            let p_bigram = *count as f64 / n;
            let p_first = unigrams[first] as f64 / n;
            let p_second = unigrams[second] as f64 / n;
            let pmi = (p_bigram / (p_first * p_second)).log2();
            if pmi > 0.0 {
                entries.push(PmiEntry {
                    first: first.clone(),
                    second: second.clone(),
                    pmi,
                });
            }
        }

        entries.sort_by(|a, b| {
            b.pmi
                .total_cmp(&a.pmi)
                .then_with(|| a.first.cmp(&b.first))
                .then_with(|| a.second.cmp(&b.second))
        });

        let positive_count = entries.len();
        let distinct_bigrams = bigrams.len();
        let positive_ratio = positive_count as f64 / distinct_bigrams as f64;

        debug!(
            unigrams = unigrams.len(),
            distinct_bigrams, positive_count, "computed PMI table"
        );

        PmiTable {
            entries,
            positive_count,
            positive_ratio,
            distinct_bigrams,
        }
    }
}
