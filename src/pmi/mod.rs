// Collocation strength: PMI over sentence-scoped lemma bigrams, with the
// lemmatizer behind a trait so the external tagger can be swapped in.

pub mod engine;
pub mod traits;
