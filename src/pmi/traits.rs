// Lemmatizer trait: the seam for the external morphological tagger.
//
// This trait defines the interface for turning a sentence into a lemma
// sequence. The production tagger lives outside this crate; what ships
// here is SurfaceLemmatizer, which treats each surface form as its own
// lemma. Collocation counts stay meaningful either way; lemmatization
// just merges inflected variants of the same pair.

/// Turn one sentence into its lemma sequence, in token order.
pub trait Lemmatizer: Send + Sync {
    /// Lemmas for one sentence. An empty sentence yields an empty vec.
    fn lemmatize(&self, sentence: &str) -> Vec<String>;
}

/// Identity lemmatizer: surface forms pass through lowercased.
///
/// The default when no tagger is wired in, and the deterministic choice
/// for tests.
pub struct SurfaceLemmatizer;

impl Lemmatizer for SurfaceLemmatizer {
    fn lemmatize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(|token| token.to_lowercase())
            .collect()
    }
}
