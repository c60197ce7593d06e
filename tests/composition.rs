// Composition tests: the full pipeline chained together,
//   Lexicon -> DocumentAnalyzer -> records -> aggregate -> compare
// without any filesystem or environment dependencies.

use kalka::aggregate::records::{DocumentRecord, ALPHA_TOKENS, TOKENS_WITH_MARKERS};
use kalka::aggregate::weighted::{aggregate, AggregationPlan};
use kalka::compare::{compare, CorpusSummary};
use kalka::error::AnalysisError;
use kalka::features::{standard_plan, DocumentAnalyzer, MARKERS_TOTAL, WORDS};
use kalka::lexicon::Lexicon;

fn lexicon() -> Lexicon {
    Lexicon::from_json(
        r#"{
            "conclusion": ["таким образом", "подводя итог"],
            "contrast": ["однако", "с другой стороны"]
        }"#,
    )
    .unwrap()
}

// ============================================================
// Chain: analyze -> aggregate
// ============================================================

#[test]
fn documents_flow_into_a_corpus_summary() {
    let lexicon = lexicon();
    let analyzer = DocumentAnalyzer::new(&lexicon).unwrap();

    let records = vec![
        analyzer.analyze(
            "auth-1",
            "Осенний ветер кружил листья. Однако парк оставался тихим. \
             Таким образом, вечер наступил незаметно.",
        ),
        analyzer.analyze(
            "auth-2",
            "Космонавт мечтал о звёздах. Подводя итог, мечта сбылась.",
        ),
        analyzer.analyze("auth-3", ""),
    ];

    let result = aggregate(&records, &standard_plan(&lexicon)).unwrap();

    assert_eq!(result.document_count, 3);
    assert!(result.scalars[MARKERS_TOTAL] > 0.0);
    assert!(result.scalars.contains_key("markers.conclusion.freq"));
    assert!(result.scalars.contains_key("markers.contrast.count"));
    assert!(
        !result.distributions[WORDS].is_empty(),
        "content words must survive into the corpus distribution"
    );
    // The empty document contributed nothing but also broke nothing
}

#[test]
fn weighted_average_end_to_end() {
    // Three hand-built records with skewed weights
    let records: Vec<DocumentRecord> = [(10u64, 50.0), (20, 60.0), (30, 70.0)]
        .iter()
        .enumerate()
        .map(|(i, (weight, value))| {
            DocumentRecord::new(format!("doc-{i}"))
                .with_weight(ALPHA_TOKENS, *weight)
                .with_scalar("lexical_density", *value)
        })
        .collect();

    let plan = AggregationPlan::new().scalar("lexical_density", ALPHA_TOKENS);
    let result = aggregate(&records, &plan).unwrap();

    let avg = result.scalars["lexical_density"];
    assert!((avg - 63.33333333333333).abs() < 1e-9, "got {avg}");
}

// ============================================================
// Chain: aggregate -> compare
// ============================================================

#[test]
fn two_corpora_compare_side_by_side() {
    let lexicon = lexicon();
    let analyzer = DocumentAnalyzer::new(&lexicon).unwrap();
    let plan = standard_plan(&lexicon);

    let authentic = vec![
        analyzer.analyze("auth-1", "Однако осень пришла рано. Таким образом, лето закончилось."),
        analyzer.analyze("auth-2", "Листья кружились над парком весь вечер."),
    ];
    let translated = vec![
        analyzer.analyze("mt-1", "Подводя итог, проект был успешным."),
        analyzer.analyze("mt-2", "С другой стороны, команда работала быстро."),
    ];

    let table = compare(&[
        CorpusSummary::new("authentic", aggregate(&authentic, &plan).unwrap()),
        CorpusSummary::new("machine", aggregate(&translated, &plan).unwrap()),
    ])
    .unwrap();

    assert_eq!(table.corpus_names, vec!["authentic", "machine"]);

    // Every scalar from the plan shows up as a row with one value per corpus
    let markers_row = table
        .scalars
        .iter()
        .find(|r| r.key == MARKERS_TOTAL)
        .expect("markers.total row");
    assert_eq!(markers_row.values.len(), 2);

    // Word rows are the union: a word seen only in one corpus still gets
    // a row, zero-filled for the other
    let words = &table.distributions[WORDS];
    let only_authentic = words
        .iter()
        .find(|r| r.key == "листья")
        .expect("authentic-only word");
    assert!(only_authentic.values[0] > 0.0);
    assert_eq!(only_authentic.values[1], 0.0);
}

#[test]
fn comparing_against_an_empty_corpus_raises() {
    let lexicon = lexicon();
    let analyzer = DocumentAnalyzer::new(&lexicon).unwrap();
    let plan = standard_plan(&lexicon);

    let records: Vec<DocumentRecord> = (0..10)
        .map(|i| analyzer.analyze(&format!("auth-{i}"), "Однако осень пришла рано."))
        .collect();

    let corpora = vec![
        CorpusSummary::new("authentic", aggregate(&records, &plan).unwrap()),
        CorpusSummary::new("machine", Default::default()),
    ];

    let err = compare(&corpora).unwrap_err();
    assert!(
        matches!(err, AnalysisError::InsufficientCorpora { found: 1 }),
        "got {err:?}"
    );
}

// ============================================================
// Weight-field plumbing
// ============================================================

#[test]
fn marker_metrics_are_weighted_by_the_scan_denominator() {
    let lexicon = lexicon();
    let analyzer = DocumentAnalyzer::new(&lexicon).unwrap();

    // A marker-dense short text and a marker-free long one: the corpus
    // frequency must sit far below the short text's own frequency
    let dense = analyzer.analyze("dense", "Таким образом, подводя итог: однако!");
    let sparse = analyzer.analyze(
        "sparse",
        "Ветер кружил жёлтые листья над тихим осенним парком. \
         Прохожие спешили домой мимо фонарей. Город засыпал медленно. \
         Звёзды появлялись одна за другой над крышами домов.",
    );

    let dense_freq = dense.scalars["markers.conclusion.freq"];
    let records = vec![dense.clone(), sparse];
    let plan = AggregationPlan::new().scalar("markers.conclusion.freq", TOKENS_WITH_MARKERS);
    let corpus_freq = aggregate(&records, &plan).unwrap().scalars["markers.conclusion.freq"];

    assert!(dense_freq > 0.0);
    assert!(
        corpus_freq < dense_freq / 2.0,
        "corpus frequency {corpus_freq} should be pulled down by the long document"
    );
}
