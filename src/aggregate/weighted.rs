// Token-weighted corpus aggregation.
//
// Every average here is Σ(weight·value) / Σ(weight): a macro-average
// weighted by the token count each per-document value was computed
// against. A plain mean of per-document percentages would let a 200-token
// abstract pull as hard as a 9,000-token article.
//
// Determinism: distributions accumulate into a hash map (amortized O(1)
// per key), then sort once at the end (value descending, key ascending on
// ties), so the output never depends on document order or map iteration
// order.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalysisError;

use super::records::DocumentRecord;

/// One metric (or distribution category) and the weight field its
/// per-document values were normalized by.
#[derive(Debug, Clone)]
pub struct MetricSpec {
    pub name: String,
    pub weight_field: String,
}

/// Which scalars and distributions to fold into an AggregateResult.
#[derive(Debug, Clone, Default)]
pub struct AggregationPlan {
    pub scalars: Vec<MetricSpec>,
    pub distributions: Vec<MetricSpec>,
}

impl AggregationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, name: &str, weight_field: &str) -> Self {
        self.scalars.push(MetricSpec {
            name: name.to_string(),
            weight_field: weight_field.to_string(),
        });
        self
    }

    pub fn distribution(mut self, category: &str, weight_field: &str) -> Self {
        self.distributions.push(MetricSpec {
            name: category.to_string(),
            weight_field: weight_field.to_string(),
        });
        self
    }
}

/// Corpus-level summary: weighted scalar averages plus distributions
/// sorted descending by value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    pub document_count: usize,
    pub scalars: BTreeMap<String, f64>,
    pub distributions: BTreeMap<String, Vec<(String, f64)>>,
}

/// Token-weighted macro-average of one scalar metric.
///
/// Records with weight 0 contribute nothing, so their presence or absence
/// cannot change the result. A record missing the weight field or the
/// metric is malformed; zero total weight is an empty corpus.
pub fn aggregate_scalar(
    records: &[DocumentRecord],
    metric: &str,
    weight_field: &str,
) -> Result<f64, AnalysisError> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for record in records {
        let weight = record.weight(weight_field)? as f64;
        let value = record.scalar(metric)?;
        weighted_sum += weight * value;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return Err(AnalysisError::EmptyCorpus {
            weight_field: weight_field.to_string(),
        });
    }

    Ok(weighted_sum / total_weight)
}

/// Token-weighted macro-average over an open-vocabulary distribution.
///
/// Every key observed in any document gets a row; a document lacking the
/// key (or the whole category) contributes weight·0 for it. Returned
/// sorted by value descending, key ascending on ties.
pub fn aggregate_distribution(
    records: &[DocumentRecord],
    category: &str,
    weight_field: &str,
) -> Result<Vec<(String, f64)>, AnalysisError> {
    let mut weighted: HashMap<String, f64> = HashMap::new();
    let mut total_weight = 0.0;

    for record in records {
        let weight = record.weight(weight_field)? as f64;
        total_weight += weight;

        // Missing category = empty distribution, not a malformed record:
        // open vocabularies make absence ordinary data
        let Some(values) = record.distributions.get(category) else {
            continue;
        };
        for (key, value) in values {
            *weighted.entry(key.clone()).or_insert(0.0) += weight * value;
        }
    }

    if total_weight == 0.0 {
        return Err(AnalysisError::EmptyCorpus {
            weight_field: weight_field.to_string(),
        });
    }

    let mut rows: Vec<(String, f64)> = weighted
        .into_iter()
        .map(|(key, sum)| (key, sum / total_weight))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(rows)
}

/// Fold a record set into one corpus summary according to the plan.
pub fn aggregate(
    records: &[DocumentRecord],
    plan: &AggregationPlan,
) -> Result<AggregateResult, AnalysisError> {
    let mut scalars = BTreeMap::new();
    for spec in &plan.scalars {
        let value = aggregate_scalar(records, &spec.name, &spec.weight_field)?;
        scalars.insert(spec.name.clone(), value);
    }

    let mut distributions = BTreeMap::new();
    for spec in &plan.distributions {
        let rows = aggregate_distribution(records, &spec.name, &spec.weight_field)?;
        distributions.insert(spec.name.clone(), rows);
    }

    debug!(
        documents = records.len(),
        scalars = scalars.len(),
        distributions = distributions.len(),
        "aggregated corpus"
    );

    Ok(AggregateResult {
        document_count: records.len(),
        scalars,
        distributions,
    })
}
