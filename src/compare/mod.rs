// Cross-corpus comparison.
//
// Takes the aggregated summaries of two or more corpora (authentic,
// machine-translated, human-translated) and lines them up row by row.
// Rows are the union of what any corpus observed: an indicator present
// in only one corpus still gets a row, with 0 for the others, because a
// missing collocation or marker is exactly the kind of signal this
// comparison exists to expose.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::weighted::AggregateResult;
use crate::error::AnalysisError;

/// One corpus's aggregated summary under its provenance label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub name: String,
    pub result: AggregateResult,
}

impl CorpusSummary {
    pub fn new(name: impl Into<String>, result: AggregateResult) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }
}

/// One row: a key and its value per corpus, parallel to
/// ComparisonTable::corpus_names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub key: String,
    pub values: Vec<f64>,
}

/// Side-by-side corpus comparison. Row order is descending by the
/// reference corpus (the first eligible one supplied), ties broken by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub corpus_names: Vec<String>,
    pub scalars: Vec<ComparisonRow>,
    pub distributions: BTreeMap<String, Vec<ComparisonRow>>,
}

impl ComparisonTable {
    pub fn corpus_index(&self, name: &str) -> Option<usize> {
        self.corpus_names.iter().position(|n| n == name)
    }
}

/// Compare two or more aggregated corpora.
///
/// Corpora with no documents are excluded with a warning; fewer than two
/// eligible corpora is an error; comparing against an empty corpus would
/// silently produce a table of meaningless zeros.
pub fn compare(corpora: &[CorpusSummary]) -> Result<ComparisonTable, AnalysisError> {
    let mut eligible: Vec<&CorpusSummary> = Vec::new();
    for corpus in corpora {
        if corpus.result.document_count > 0 {
            eligible.push(corpus);
        } else {
            warn!(corpus = %corpus.name, "corpus has no documents, excluded from comparison");
        }
    }

    if eligible.len() < 2 {
        return Err(AnalysisError::InsufficientCorpora {
            found: eligible.len(),
        });
    }

    let corpus_names: Vec<String> = eligible.iter().map(|c| c.name.clone()).collect();

    // Scalar rows: union of metric names across eligible corpora
    let scalar_keys: BTreeSet<&str> = eligible
        .iter()
        .flat_map(|c| c.result.scalars.keys().map(|k| k.as_str()))
        .collect();
    let mut scalars: Vec<ComparisonRow> = scalar_keys
        .into_iter()
        .map(|key| ComparisonRow {
            key: key.to_string(),
            values: eligible
                .iter()
                .map(|c| c.result.scalars.get(key).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();
    sort_by_reference(&mut scalars);

    // Distribution rows, one group per category
    let category_names: BTreeSet<&str> = eligible
        .iter()
        .flat_map(|c| c.result.distributions.keys().map(|k| k.as_str()))
        .collect();
    let mut distributions = BTreeMap::new();
    for category in category_names {
        let per_corpus: Vec<HashMap<&str, f64>> = eligible
            .iter()
            .map(|c| {
                c.result
                    .distributions
                    .get(category)
                    .map(|rows| rows.iter().map(|(k, v)| (k.as_str(), *v)).collect())
                    .unwrap_or_default()
            })
            .collect();

        let keys: BTreeSet<&str> = per_corpus
            .iter()
            .flat_map(|m| m.keys().copied())
            .collect();
        let mut rows: Vec<ComparisonRow> = keys
            .into_iter()
            .map(|key| ComparisonRow {
                key: key.to_string(),
                values: per_corpus
                    .iter()
                    .map(|m| m.get(key).copied().unwrap_or(0.0))
                    .collect(),
            })
            .collect();
        sort_by_reference(&mut rows);
        distributions.insert(category.to_string(), rows);
    }

    Ok(ComparisonTable {
        corpus_names,
        scalars,
        distributions,
    })
}

/// Descending by the reference (first) corpus, key ascending on ties.
fn sort_by_reference(rows: &mut [ComparisonRow]) {
    rows.sort_by(|a, b| {
        b.values[0]
            .total_cmp(&a.values[0])
            .then_with(|| a.key.cmp(&b.key))
    });
}
