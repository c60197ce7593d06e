// Per-document measurement records.
//
// One canonical schema for everything a document analysis produces: named
// weight fields (token counts), scalar metrics, and open-vocabulary
// categorical distributions. The aggregator never hardcodes which weight
// applies to which metric; records just carry every count a caller might
// weight by.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Weight field: word tokens only (Cyrillic/Latin, hyphenated compounds once).
pub const ALPHA_TOKENS: &str = "alpha_tokens";
/// Weight field: all tokens, punctuation included.
pub const ALL_TOKENS: &str = "all_tokens";
/// Weight field: the marker-scan denominator (clean tokens + marker matches).
pub const TOKENS_WITH_MARKERS: &str = "tokens_with_markers";

/// Everything measured for one document. Immutable once built; the
/// aggregation pipeline reads a complete snapshot of these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Caller-supplied label, used in error messages
    pub id: String,
    /// Named token counts the averages are weighted by
    pub weights: HashMap<String, u64>,
    /// Scalar metrics by name
    pub scalars: HashMap<String, f64>,
    /// category → key → value. Keys are an open vocabulary: a key absent
    /// here simply counts as 0 for this document.
    pub distributions: HashMap<String, HashMap<String, f64>>,
}

impl DocumentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, field: &str, value: u64) -> Self {
        self.weights.insert(field.to_string(), value);
        self
    }

    pub fn with_scalar(mut self, name: &str, value: f64) -> Self {
        self.scalars.insert(name.to_string(), value);
        self
    }

    pub fn with_distribution(mut self, category: &str, values: HashMap<String, f64>) -> Self {
        self.distributions.insert(category.to_string(), values);
        self
    }

    /// A weight field, or MalformedRecord: a record that cannot be
    /// weighted would silently corrupt every average it participates in.
    pub(crate) fn weight(&self, field: &str) -> Result<u64, AnalysisError> {
        self.weights
            .get(field)
            .copied()
            .ok_or_else(|| AnalysisError::MalformedRecord {
                record: self.id.clone(),
                field: field.to_string(),
            })
    }

    /// A scalar metric, or MalformedRecord.
    pub(crate) fn scalar(&self, name: &str) -> Result<f64, AnalysisError> {
        self.scalars
            .get(name)
            .copied()
            .ok_or_else(|| AnalysisError::MalformedRecord {
                record: self.id.clone(),
                field: name.to_string(),
            })
    }
}
