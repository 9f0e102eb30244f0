// Joint TF-IDF vectors over exactly the two documents being compared.
//
// IDF is computed fresh for each pair with the smoothed form
// ln((1+N)/(1+df)) + 1, N = 2, and each document vector is L2-normalized.
// No corpus statistics persist across runs, so scores from different pairs
// are not comparable with each other: pair A/B and pair C/D weight the same
// term differently. That is a property of per-pair weighting, not a bug.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// Settings for vocabulary construction.
#[derive(Debug, Clone)]
pub struct VectorConfig {
    /// Hard cap on vocabulary size. Features beyond the cap are dropped by
    /// ascending global term frequency, ties broken alphabetically.
    pub max_features: usize,
    /// Include 2-gram features alongside 1-grams.
    pub bigrams: bool,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            max_features: 10_000,
            bigrams: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// No usable feature survived vocabulary construction.
    #[error("no usable features in either document")]
    EmptyVocabulary,
}

/// TF-IDF vectors for the two documents over a shared vocabulary.
#[derive(Debug)]
pub struct VectorPair {
    /// Sorted feature list; the dimension order of both vectors.
    pub vocabulary: Vec<String>,
    pub original: Vec<f64>,
    pub candidate: Vec<f64>,
}

/// Build the joint vector pair from two token sequences.
///
/// Token order is irrelevant here except through 2-gram features; the
/// sequences are treated as multisets of 1-grams (plus adjacent 2-grams
/// when configured).
pub fn build_pair(
    original: &[String],
    candidate: &[String],
    config: &VectorConfig,
) -> Result<VectorPair, VectorError> {
    let counts_a = feature_counts(original, config.bigrams);
    let counts_b = feature_counts(candidate, config.bigrams);

    let vocabulary = select_vocabulary(&counts_a, &counts_b, config.max_features);
    if vocabulary.is_empty() {
        return Err(VectorError::EmptyVocabulary);
    }

    debug!(features = vocabulary.len(), "Built joint vocabulary");

    let weights_a = weigh(&counts_a, &counts_b, &vocabulary);
    let weights_b = weigh(&counts_b, &counts_a, &vocabulary);

    Ok(VectorPair {
        vocabulary,
        original: weights_a,
        candidate: weights_b,
    })
}

/// Count 1-gram (and optionally adjacent 2-gram) features in one document.
fn feature_counts(tokens: &[String], bigrams: bool) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    if bigrams {
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
    }
    counts
}

/// Union vocabulary of both documents, capped at `max_features` by
/// descending global term frequency, returned in sorted order so vector
/// dimensions are stable across runs.
fn select_vocabulary(
    counts_a: &HashMap<String, usize>,
    counts_b: &HashMap<String, usize>,
    max_features: usize,
) -> Vec<String> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for (feature, count) in counts_a.iter().chain(counts_b.iter()) {
        *totals.entry(feature.as_str()).or_insert(0) += count;
    }

    let mut features: Vec<(&str, usize)> = totals.into_iter().collect();
    if features.len() > max_features {
        features.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        features.truncate(max_features);
    }

    let mut vocabulary: Vec<String> =
        features.into_iter().map(|(f, _)| f.to_string()).collect();
    vocabulary.sort_unstable();
    vocabulary
}

/// One document's TF * smoothed-IDF weights, L2-normalized.
fn weigh(
    counts: &HashMap<String, usize>,
    other: &HashMap<String, usize>,
    vocabulary: &[String],
) -> Vec<f64> {
    let mut vector: Vec<f64> = vocabulary
        .iter()
        .map(|feature| {
            let tf = counts.get(feature).copied().unwrap_or(0) as f64;
            let df = [counts, other]
                .iter()
                .filter(|c| c.contains_key(feature))
                .count() as f64;
            // Smoothed IDF over the two-document corpus (N = 2).
            let idf = ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect();

    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in &mut vector {
            *w /= norm;
        }
    }
    vector
}
