// The marker lexicon: which phrases signal which rhetorical function.
//
// A Lexicon is built once at startup from configuration and passed by
// reference into the scanner. It is immutable after construction: every
// category's markers are lowercased, deduplicated, and sorted longest-first
// here, so no caller ever has to remember to pre-sort.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Categorized marker phrases, each category sorted by descending length.
///
/// Longest-first order is what makes multi-word markers match as atomic
/// units: "подводя итог" must be tried before "итог".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    categories: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Build a lexicon from category → marker lists.
    ///
    /// Markers are lowercased and deduplicated; empty markers and empty
    /// categories are rejected rather than silently dropped, since a
    /// half-loaded lexicon would skew every frequency downstream.
    pub fn new<I, M>(categories: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = (String, M)>,
        M: IntoIterator<Item = String>,
    {
        let mut sorted: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (name, markers) in categories {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AnalysisError::Configuration(
                    "lexicon contains a category with an empty name".to_string(),
                ));
            }

            let mut cleaned: Vec<String> = Vec::new();
            for marker in markers {
                let marker = marker.trim().to_lowercase();
                if marker.is_empty() {
                    return Err(AnalysisError::Configuration(format!(
                        "category `{name}` contains an empty marker"
                    )));
                }
                if !cleaned.contains(&marker) {
                    cleaned.push(marker);
                }
            }
            if cleaned.is_empty() {
                return Err(AnalysisError::Configuration(format!(
                    "category `{name}` has no markers"
                )));
            }

            sort_longest_first(&mut cleaned);
            sorted.insert(name, cleaned);
        }

        if sorted.is_empty() {
            return Err(AnalysisError::Configuration(
                "lexicon has no categories".to_string(),
            ));
        }

        Ok(Self { categories: sorted })
    }

    /// Parse a lexicon from its JSON form: `{"category": ["marker", ...]}`.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| AnalysisError::Configuration(format!("lexicon is not valid JSON: {e}")))?;
        Self::new(raw)
    }

    /// Category names in stable (alphabetical) order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|s| s.as_str())
    }

    /// Markers of one category, longest first. None for unknown categories.
    pub fn markers(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(|v| v.as_slice())
    }

    /// The union of all markers across categories, longest first, deduplicated.
    /// This is the alternation the scanner compiles into a single pattern.
    pub fn all_markers(&self) -> Vec<&str> {
        let mut all: Vec<&str> = Vec::new();
        for markers in self.categories.values() {
            for marker in markers {
                if !all.contains(&marker.as_str()) {
                    all.push(marker);
                }
            }
        }
        all.sort_by(|a, b| {
            let len_a = a.chars().count();
            let len_b = b.chars().count();
            len_b.cmp(&len_a).then_with(|| a.cmp(b))
        });
        all
    }

    /// Every category a marker belongs to, in stable order. Categories are
    /// not a partition: one marker may appear in several.
    pub fn categories_of(&self, marker: &str) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|(_, markers)| markers.iter().any(|m| m == marker))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Descending character length, alphabetical within a length.
fn sort_longest_first(markers: &mut [String]) {
    markers.sort_by(|a, b| {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        len_b.cmp(&len_a).then_with(|| a.cmp(b))
    });
}
