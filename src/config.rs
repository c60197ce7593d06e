use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::lexicon::Lexicon;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Everything has a default except the lexicon path; no markers, no
/// marker analysis.
pub struct Config {
    /// Path to the marker lexicon JSON ({"category": ["marker", ...]})
    pub lexicon_path: Option<PathBuf>,
    /// Default display threshold for the PMI table (KALKA_MIN_PMI)
    pub min_pmi: f64,
    /// How many distribution rows the terminal renderer shows per
    /// category (KALKA_TOP_ROWS)
    pub top_rows: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let min_pmi = match env::var("KALKA_MIN_PMI") {
            Ok(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("KALKA_MIN_PMI is not a number: {raw}"))?,
            Err(_) => 0.0,
        };

        let top_rows = match env::var("KALKA_TOP_ROWS") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("KALKA_TOP_ROWS is not a number: {raw}"))?,
            Err(_) => 50,
        };

        Ok(Self {
            lexicon_path: env::var("KALKA_LEXICON").ok().map(PathBuf::from),
            min_pmi,
            top_rows,
        })
    }

    /// Check that a lexicon path is configured.
    /// Call this before any operation that scans for markers.
    pub fn require_lexicon(&self) -> Result<&PathBuf> {
        self.lexicon_path.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "KALKA_LEXICON not set. Point it at a marker lexicon JSON file.\n\
                 Format: {{\"category\": [\"marker\", ...], ...}}"
            )
        })
    }

    /// Read and validate the configured lexicon file.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let path = self.require_lexicon()?;
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon file {}", path.display()))?;
        let lexicon = Lexicon::from_json(&raw)
            .with_context(|| format!("invalid lexicon in {}", path.display()))?;
        Ok(lexicon)
    }
}
