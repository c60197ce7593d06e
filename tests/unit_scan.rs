// Unit tests for lexical scanning.
//
// Covers the longest-match guarantee, inclusive category counting, the
// frequency denominator (clean tokens + marker matches), and the
// degenerate-input behavior (zero-filled results, never an error).

use kalka::lexicon::Lexicon;
use kalka::scan::scanner::LexicalScanner;
use kalka::scan::strip::strip_markers;

fn lexicon(pairs: &[(&str, &[&str])]) -> Lexicon {
    Lexicon::new(pairs.iter().map(|(name, markers)| {
        (
            name.to_string(),
            markers.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
        )
    }))
    .unwrap()
}

fn scanner(lexicon: &Lexicon) -> LexicalScanner {
    LexicalScanner::with_stopwords(lexicon, Vec::<String>::new()).unwrap()
}

// ============================================================
// Longest match
// ============================================================

#[test]
fn overlapping_markers_match_longest_first() {
    let lex = lexicon(&[("x", &["a", "a b"])]);
    let result = scanner(&lex).scan("a b c");

    assert_eq!(result.total_matches, 1, "\"a b\" must match as one unit");
    assert_eq!(result.matches_in_order[0].marker, "a b");
}

#[test]
fn scanner_sorts_markers_itself() {
    // Shortest listed first; the scanner must not depend on caller order
    let lex = lexicon(&[("c", &["итог", "подводя итог"])]);
    let result = scanner(&lex).scan("подводя итог всему");
    assert_eq!(result.matches_in_order[0].marker, "подводя итог");
}

#[test]
fn matches_do_not_overlap() {
    let lex = lexicon(&[("x", &["a b", "b c"])]);
    let result = scanner(&lex).scan("a b c");
    // After "a b" is consumed, "b c" has no "b" left to match
    assert_eq!(result.total_matches, 1);
}

// ============================================================
// Category counting
// ============================================================

#[test]
fn conclusion_markers_end_to_end() {
    let lex = lexicon(&[("conclusion", &["таким образом", "подводя итог"])]);
    let result = scanner(&lex).scan("Таким образом, подводя итог.");

    assert_eq!(result.per_category_count["conclusion"], 2);

    let order: Vec<&str> = result
        .matches_in_order
        .iter()
        .map(|m| m.marker.as_str())
        .collect();
    assert_eq!(order, ["таким образом", "подводя итог"]);

    // Nothing but the two markers survives: denominator = 0 + 2
    assert_eq!(result.denominator, 2);
    let expected = 2.0 / result.denominator as f64;
    assert!(
        (result.per_category_freq["conclusion"] - expected).abs() < 1e-12,
        "freq was {}",
        result.per_category_freq["conclusion"]
    );
}

#[test]
fn marker_shared_between_categories_counts_in_both() {
    let lex = lexicon(&[
        ("contrast", &["однако"]),
        ("emphasis", &["однако", "именно"]),
    ]);
    let result = scanner(&lex).scan("однако именно");

    assert_eq!(result.per_category_count["contrast"], 1);
    assert_eq!(result.per_category_count["emphasis"], 2);
    assert_eq!(result.total_matches, 2, "each occurrence counts once in the total");
}

#[test]
fn unmatched_category_stays_present_at_zero() {
    let lex = lexicon(&[("contrast", &["однако"]), ("conclusion", &["таким образом"])]);
    let result = scanner(&lex).scan("однако зима");

    assert_eq!(result.per_category_count["conclusion"], 0);
    assert_eq!(result.per_category_freq["conclusion"], 0.0);
}

// ============================================================
// Denominator
// ============================================================

#[test]
fn denominator_counts_clean_tokens_plus_matches() {
    let lex = lexicon(&[("c", &["однако"])]);
    let scanner = LexicalScanner::with_stopwords(&lex, ["и"]).unwrap();
    // words: однако(marker) кот и(stop) пёс → clean 2 + match 1
    let result = scanner.scan("однако кот и пёс");
    assert_eq!(result.denominator, 3);
}

#[test]
fn empty_text_returns_zeroes_not_an_error() {
    let lex = lexicon(&[("c", &["однако"])]);
    let result = scanner(&lex).scan("");
    assert_eq!(result.total_matches, 0);
    assert_eq!(result.denominator, 0);
    assert!(result.matches_in_order.is_empty());
    assert_eq!(result.per_category_freq["c"], 0.0);
}

#[test]
fn punctuation_only_text_returns_zeroes() {
    let lex = lexicon(&[("c", &["однако"])]);
    let result = scanner(&lex).scan("... !? —");
    assert_eq!(result.denominator, 0);
}

// ============================================================
// strip_markers
// ============================================================

#[test]
fn strip_removes_multiword_markers_atomically() {
    let (clean, removed) = strip_markers("Подводя итог: итог ясен", &["итог", "подводя итог"]);
    // One two-word phrase, one standalone word
    assert_eq!(removed, 2);
    assert_eq!(clean, ": ясен");
}

#[test]
fn strip_does_not_double_count_subwords() {
    let (_, removed) = strip_markers("таким образом", &["таким образом", "образом"]);
    assert_eq!(removed, 1, "sub-word of a removed phrase counted separately");
}

#[test]
fn strip_collapses_leftover_whitespace() {
    let (clean, _) = strip_markers("раз  однако  два", &["однако"]);
    assert_eq!(clean, "раз два");
}
