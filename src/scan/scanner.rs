// Longest-match lexical scanning for discourse markers.
//
// One pattern is compiled from every marker in every category, longest
// first, and run left-to-right over the lowercased text. Non-overlapping
// matches fall out of find_iter; longest-match-at-a-position falls out of
// the alternation order. Categories are not a partition; a marker listed
// under two categories increments both on every match.
//
// The frequency denominator: tokens that survive marker and stopword
// removal, plus the marker matches themselves. Marker density stays
// comparable across documents of very different lengths.

use std::collections::{BTreeMap, HashMap, HashSet};

use regex::Regex;
use tracing::debug;

use crate::error::AnalysisError;
use crate::lexicon::Lexicon;

use super::strip::marker_pattern;
use super::tokens::Tokenizer;

/// One marker occurrence, in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// The matched marker, lowercased
    pub marker: String,
    /// Every category the marker belongs to, in stable order
    pub categories: Vec<String>,
}

/// What one scan over one document found. Produced fresh per document.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Total marker occurrences (each match counted once, regardless of
    /// how many categories share the marker)
    pub total_matches: usize,
    /// Matches in left-to-right text order
    pub matches_in_order: Vec<MarkerMatch>,
    /// Occurrences per category (inclusive: shared markers count in each)
    pub per_category_count: BTreeMap<String, usize>,
    /// count / denominator per category
    pub per_category_freq: BTreeMap<String, f64>,
    /// Tokens left after marker and stopword removal, plus the matches.
    /// Zero only for degenerate texts.
    pub denominator: usize,
}

impl ScanResult {
    fn zeroed<'a>(categories: impl Iterator<Item = &'a str>) -> Self {
        let mut count = BTreeMap::new();
        let mut freq = BTreeMap::new();
        for category in categories {
            count.insert(category.to_string(), 0);
            freq.insert(category.to_string(), 0.0);
        }
        Self {
            total_matches: 0,
            matches_in_order: Vec::new(),
            per_category_count: count,
            per_category_freq: freq,
            denominator: 0,
        }
    }
}

/// Longest-match, multi-category marker detector.
pub struct LexicalScanner {
    pattern: Regex,
    marker_categories: HashMap<String, Vec<String>>,
    category_names: Vec<String>,
    stopwords: HashSet<String>,
    tokenizer: Tokenizer,
}

impl LexicalScanner {
    /// Build a scanner over the lexicon, with the generic Russian stopword
    /// list from the stop-words crate.
    pub fn new(lexicon: &Lexicon) -> Result<Self, AnalysisError> {
        let stopwords = stop_words::get(stop_words::LANGUAGE::Russian)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self::build(lexicon, stopwords)
    }

    /// Build a scanner with a custom stopword list (tests, other corpora).
    pub fn with_stopwords<I, S>(lexicon: &Lexicon, stopwords: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .collect();
        Self::build(lexicon, stopwords)
    }

    fn build(lexicon: &Lexicon, stopwords: HashSet<String>) -> Result<Self, AnalysisError> {
        let all_markers = lexicon.all_markers();
        let pattern = marker_pattern(&all_markers).ok_or_else(|| {
            AnalysisError::Configuration("lexicon has no usable markers".to_string())
        })?;

        let mut marker_categories = HashMap::new();
        for marker in &all_markers {
            let categories: Vec<String> = lexicon
                .categories_of(marker)
                .into_iter()
                .map(|c| c.to_string())
                .collect();
            marker_categories.insert(marker.to_string(), categories);
        }

        Ok(Self {
            pattern,
            marker_categories,
            category_names: lexicon.category_names().map(|c| c.to_string()).collect(),
            stopwords,
            tokenizer: Tokenizer::new(),
        })
    }

    /// Scan one document. Degenerate input (nothing left to count) yields
    /// an all-zero result rather than an error; batch runs must survive
    /// the occasional empty text.
    pub fn scan(&self, text: &str) -> ScanResult {
        let lowered = text.to_lowercase();

        let mut matches_in_order = Vec::new();
        let mut per_category_count: BTreeMap<String, usize> = self
            .category_names
            .iter()
            .map(|c| (c.clone(), 0))
            .collect();

        for m in self.pattern.find_iter(&lowered) {
            let marker = m.as_str();
            let categories = self
                .marker_categories
                .get(marker)
                .cloned()
                .unwrap_or_default();
            for category in &categories {
                if let Some(count) = per_category_count.get_mut(category) {
                    *count += 1;
                }
            }
            matches_in_order.push(MarkerMatch {
                marker: marker.to_string(),
                categories,
            });
        }
        let total_matches = matches_in_order.len();

        // Denominator: what survives marker + stopword removal, plus the
        // matches themselves
        let stripped = self.pattern.replace_all(&lowered, " ");
        let remaining = self
            .tokenizer
            .words(&stripped)
            .into_iter()
            .filter(|w| !self.stopwords.contains(*w))
            .count();
        let denominator = remaining + total_matches;

        if denominator == 0 {
            return ScanResult::zeroed(self.category_names.iter().map(|c| c.as_str()));
        }

        let per_category_freq: BTreeMap<String, f64> = per_category_count
            .iter()
            .map(|(category, count)| (category.clone(), *count as f64 / denominator as f64))
            .collect();

        debug!(
            matches = total_matches,
            denominator, "scanned document for markers"
        );

        ScanResult {
            total_matches,
            matches_in_order,
            per_category_count,
            per_category_freq,
            denominator,
        }
    }

    /// Remove every marker from the text with this scanner's compiled
    /// pattern. Same semantics as strip::strip_markers, without paying for
    /// a fresh compile.
    pub fn strip(&self, text: &str) -> (String, usize) {
        let lowered = text.to_lowercase();
        let removed = self.pattern.find_iter(&lowered).count();
        let stripped = self.pattern.replace_all(&lowered, " ");
        let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        (collapsed, removed)
    }

    /// The stopword list this scanner removes before counting the denominator.
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }
}
