// Colored terminal output for corpus summaries and comparisons.
//
// Ratio-valued scalars (".freq", ".ratio") are shown as percentages here;
// the underlying data keeps plain ratios so downstream math stays honest.

use colored::Colorize;

use crate::aggregate::weighted::AggregateResult;
use crate::compare::ComparisonTable;
use crate::pmi::engine::PmiTable;

use super::truncate_chars;

/// Display one corpus summary: scalar averages, then the top rows of each
/// distribution.
pub fn display_aggregate(name: &str, result: &AggregateResult, top_rows: usize) {
    println!(
        "\n{}",
        format!(
            "=== Corpus `{}` ({} documents) ===",
            name, result.document_count
        )
        .bold()
    );
    println!();

    println!("  {:<42} {:>12}", "Indicator".dimmed(), "Value".dimmed());
    println!("  {}", "-".repeat(56).dimmed());
    for (metric, value) in &result.scalars {
        println!("  {:<42} {:>12}", metric, format_scalar(metric, *value));
    }

    for (category, rows) in &result.distributions {
        println!("\n  {}", format!("Top `{category}`").bold());
        for (key, value) in rows.iter().take(top_rows) {
            println!("    {:<40} {:>10.4}", truncate_chars(key, 36), value);
        }
        if rows.len() > top_rows {
            println!("    {}", format!("... {} more", rows.len() - top_rows).dimmed());
        }
    }
    println!();
}

/// Display the collocation table, strongest first, above a display
/// threshold. The threshold is a view filter; nothing is recomputed.
pub fn display_pmi(table: &PmiTable, min_pmi: f64) {
    let entries = table.above(min_pmi);

    println!(
        "\n{}",
        format!("=== Bigrams with PMI > {min_pmi:.2} ({} found) ===", entries.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<44} {:>8}",
        "#".dimmed(),
        "Bigram".dimmed(),
        "PMI".dimmed()
    );
    println!("  {}", "-".repeat(60).dimmed());

    for (i, entry) in entries.iter().enumerate() {
        let bigram = format!("{} {}", entry.first, entry.second);
        println!(
            "  {:>4}. {:<44} {:>8.4}",
            i + 1,
            truncate_chars(&bigram, 40),
            entry.pmi
        );
    }

    println!(
        "\n  {} of {} distinct bigrams associate positively ({:.1}%)",
        table.positive_count,
        table.distinct_bigrams,
        table.positive_ratio * 100.0
    );
}

/// Display corpora side by side, one column per corpus.
pub fn display_comparison(table: &ComparisonTable) {
    println!(
        "\n{}",
        format!("=== Corpus comparison ({}) ===", table.corpus_names.join(" / ")).bold()
    );
    println!();

    print!("  {:<36}", "Indicator".dimmed());
    for name in &table.corpus_names {
        print!(" {:>14}", truncate_chars(name, 12).dimmed());
    }
    println!();
    println!(
        "  {}",
        "-".repeat(36 + 15 * table.corpus_names.len()).dimmed()
    );

    for row in &table.scalars {
        print!("  {:<36}", truncate_chars(&row.key, 32));
        for value in &row.values {
            print!(" {:>14}", format_scalar(&row.key, *value));
        }
        println!();
    }

    for (category, rows) in &table.distributions {
        println!("\n  {}", format!("Distribution `{category}`").bold());
        for row in rows {
            print!("  {:<36}", truncate_chars(&row.key, 32));
            for value in &row.values {
                print!(" {:>14.4}", value);
            }
            println!();
        }
    }
    println!();
}

/// Ratios render as percentages, everything else as plain numbers.
fn format_scalar(metric: &str, value: f64) -> String {
    if metric.ends_with(".freq") || metric.ends_with(".ratio") {
        format!("{:.3}%", value * 100.0)
    } else {
        format!("{value:.3}")
    }
}
