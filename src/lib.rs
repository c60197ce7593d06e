// Kalka: translationese indicator extraction for Russian texts.
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline: scan raw text for markers, assemble per-document
// records, fold records into token-weighted corpus summaries, compare
// corpora side by side. Tagging and persistence live outside this crate.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod output;
pub mod pmi;
pub mod scan;
