// Error taxonomy for the analysis core.
//
// Per-document degenerate inputs (empty text, zero tokens) are absorbed by
// returning zero-filled results; everything here is a corpus-level or
// configuration condition that must reach the caller as a distinct,
// matchable variant instead of a silently defaulted value.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The lexicon (or another piece of configuration) is empty or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The supplied documents sum to zero weight; 0/0 is undefined, and
    /// returning 0.0 would masquerade as a real average.
    #[error("corpus has zero total weight for field `{weight_field}`")]
    EmptyCorpus { weight_field: String },

    /// Fewer than two corpora with documents were supplied for comparison.
    #[error("comparison needs at least 2 corpora with documents, found {found}")]
    InsufficientCorpora { found: usize },

    /// A record is missing a weight or metric field the aggregation needs.
    /// Skipping it silently would corrupt the weighted average for every
    /// other metric computed from the same record set.
    #[error("record `{record}` is missing required field `{field}`")]
    MalformedRecord { record: String, field: String },
}
