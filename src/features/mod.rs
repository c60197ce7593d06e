// Per-document feature extraction.
//
// DocumentAnalyzer runs every indicator over one text and assembles the
// result into a single DocumentRecord: token-count weights, marker
// scalars, lexical variety, mean word length, the per-document PMI ratio,
// and the open-vocabulary distributions (words, markers, punctuation).
// The aggregation pipeline only ever sees the records.

use std::collections::HashMap;

use tracing::info;

use crate::aggregate::records::{
    DocumentRecord, ALL_TOKENS, ALPHA_TOKENS, TOKENS_WITH_MARKERS,
};
use crate::aggregate::weighted::AggregationPlan;
use crate::error::AnalysisError;
use crate::lexicon::Lexicon;
use crate::pmi::engine::PmiEngine;
use crate::pmi::traits::{Lemmatizer, SurfaceLemmatizer};
use crate::scan::scanner::LexicalScanner;
use crate::scan::strip::remove_stopwords;
use crate::scan::tokens::Tokenizer;

/// Scalar: total marker matches.
pub const MARKERS_TOTAL: &str = "markers.total";
/// Scalar: type-token ratio over word tokens, in percent.
pub const LEXICAL_VARIETY_TTR: &str = "lexical_variety.ttr";
/// Scalar: mean word length in characters.
pub const MEAN_WORD_LENGTH: &str = "mean_word_length";
/// Scalar: share of bigrams with positive PMI within this document.
pub const PMI_POSITIVE_RATIO: &str = "pmi.positive_ratio";

/// Distribution: content-word counts (markers and stopwords removed).
pub const WORDS: &str = "words";
/// Distribution: per-marker occurrence counts.
pub const MARKERS: &str = "markers";
/// Distribution: punctuation symbol counts.
pub const PUNCTUATION: &str = "punctuation";

/// Everything needed to turn one raw text into a DocumentRecord.
pub struct DocumentAnalyzer<L: Lemmatizer> {
    scanner: LexicalScanner,
    pmi: PmiEngine<L>,
    tokenizer: Tokenizer,
}

impl DocumentAnalyzer<SurfaceLemmatizer> {
    /// Analyzer with the built-in identity lemmatizer.
    pub fn new(lexicon: &Lexicon) -> Result<Self, AnalysisError> {
        Self::with_lemmatizer(lexicon, SurfaceLemmatizer)
    }
}

impl<L: Lemmatizer> DocumentAnalyzer<L> {
    /// Analyzer backed by an external tagger's lemmatizer.
    pub fn with_lemmatizer(lexicon: &Lexicon, lemmatizer: L) -> Result<Self, AnalysisError> {
        Ok(Self {
            scanner: LexicalScanner::new(lexicon)?,
            pmi: PmiEngine::new(lemmatizer),
            tokenizer: Tokenizer::new(),
        })
    }

    /// Measure one document. Degenerate texts produce a zero-filled
    /// record, not an error; the corpus run must not die on one empty
    /// file.
    pub fn analyze(&self, id: &str, text: &str) -> DocumentRecord {
        let counts = self.tokenizer.counts(text);
        let scan = self.scanner.scan(text);

        let mut record = DocumentRecord::new(id)
            .with_weight(ALPHA_TOKENS, counts.alpha as u64)
            .with_weight(ALL_TOKENS, counts.all as u64)
            .with_weight(TOKENS_WITH_MARKERS, scan.denominator as u64)
            .with_scalar(MARKERS_TOTAL, scan.total_matches as f64)
            .with_scalar(LEXICAL_VARIETY_TTR, self.type_token_ratio(text))
            .with_scalar(MEAN_WORD_LENGTH, self.mean_word_length(text))
            .with_scalar(
                PMI_POSITIVE_RATIO,
                self.pmi.compute(&[text]).positive_ratio,
            );

        for (category, count) in &scan.per_category_count {
            record = record.with_scalar(
                &format!("markers.{category}.count"),
                *count as f64,
            );
        }
        for (category, freq) in &scan.per_category_freq {
            record = record.with_scalar(&format!("markers.{category}.freq"), *freq);
        }

        // Per-marker occurrences, in-order matches folded into counts
        let mut marker_counts: HashMap<String, f64> = HashMap::new();
        for m in &scan.matches_in_order {
            *marker_counts.entry(m.marker.clone()).or_insert(0.0) += 1.0;
        }
        record = record.with_distribution(MARKERS, marker_counts);

        // Content words: markers out first (atomically), then stopwords
        let (without_markers, _) = self.scanner.strip(text);
        let (content, _) = remove_stopwords(&without_markers, self.scanner.stopwords());
        let mut word_counts: HashMap<String, f64> = HashMap::new();
        for word in self.tokenizer.words(&content) {
            *word_counts.entry(word.to_string()).or_insert(0.0) += 1.0;
        }
        record = record.with_distribution(WORDS, word_counts);

        let punctuation: HashMap<String, f64> = self
            .tokenizer
            .punctuation_counts(text)
            .into_iter()
            .map(|(symbol, count)| (symbol, count as f64))
            .collect();
        record = record.with_distribution(PUNCTUATION, punctuation);

        info!(
            document = id,
            alpha_tokens = counts.alpha,
            markers = scan.total_matches,
            "analyzed document"
        );

        record
    }

    /// Types over tokens, percent, over lowercased word tokens.
    fn type_token_ratio(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let words = self.tokenizer.words(&lowered);
        if words.is_empty() {
            return 0.0;
        }
        let types: std::collections::HashSet<&str> = words.iter().copied().collect();
        types.len() as f64 / words.len() as f64 * 100.0
    }

    fn mean_word_length(&self, text: &str) -> f64 {
        let words = self.tokenizer.words(text);
        if words.is_empty() {
            return 0.0;
        }
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        chars as f64 / words.len() as f64
    }
}

/// The aggregation plan matching how each metric family is normalized:
/// marker metrics by the scan denominator, lexical metrics by word
/// tokens, punctuation by all tokens.
pub fn standard_plan(lexicon: &Lexicon) -> AggregationPlan {
    let mut plan = AggregationPlan::new()
        .scalar(MARKERS_TOTAL, TOKENS_WITH_MARKERS)
        .scalar(LEXICAL_VARIETY_TTR, ALPHA_TOKENS)
        .scalar(MEAN_WORD_LENGTH, ALPHA_TOKENS)
        .scalar(PMI_POSITIVE_RATIO, ALPHA_TOKENS)
        .distribution(MARKERS, TOKENS_WITH_MARKERS)
        .distribution(WORDS, ALPHA_TOKENS)
        .distribution(PUNCTUATION, ALL_TOKENS);

    for category in lexicon.category_names() {
        plan = plan
            .scalar(&format!("markers.{category}.count"), TOKENS_WITH_MARKERS)
            .scalar(&format!("markers.{category}.freq"), TOKENS_WITH_MARKERS);
    }
    plan
}
