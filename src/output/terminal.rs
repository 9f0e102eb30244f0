// Colored terminal output for comparison reports.

use colored::Colorize;

use crate::output::format_score;
use crate::pipeline::Comparison;
use crate::similarity::SimilarityBand;

/// Display a comparison report in the terminal.
pub fn display_comparison(comparison: &Comparison) {
    println!("\n{}", "=== Similarity Report ===".bold());
    println!();
    println!(
        "  Score: {}  ({})",
        format_score(comparison.score).bold(),
        colorize_band(comparison.band),
    );
    println!();
    println!("  Original tokens:   {}", comparison.original_tokens);
    println!("  Candidate tokens:  {}", comparison.candidate_tokens);
    println!("  Shared vocabulary: {} features", comparison.vocabulary_size);

    if comparison.band == SimilarityBand::High {
        println!();
        println!(
            "  {} candidate text substantially overlaps the original",
            "!!".red().bold()
        );
    }
    println!();
}

/// Display the token listing for the `tokens` subcommand.
pub fn display_tokens(tokens: &[String]) {
    if tokens.is_empty() {
        println!("No tokens survived normalization and filtering.");
        return;
    }
    for (i, token) in tokens.iter().enumerate() {
        println!("  {:>4}. {token}", i + 1);
    }
    println!("\n  {} tokens", tokens.len());
}

/// Colorize a similarity band label.
fn colorize_band(band: SimilarityBand) -> colored::ColoredString {
    match band {
        SimilarityBand::High => band.as_str().red().bold(),
        SimilarityBand::Moderate => band.as_str().yellow(),
        SimilarityBand::Low => band.as_str().green(),
        SimilarityBand::Minimal => band.as_str().dimmed(),
    }
}
