// Corpus aggregation: per-document records and the token-weighted
// reduction that merges them into corpus-level summaries.

pub mod records;
pub mod weighted;
