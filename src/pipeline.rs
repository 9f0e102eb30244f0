// The scoring pipeline: normalize, tokenize, vectorize, score.
//
// Degenerate inputs short-circuit vectorization. Two empty token sequences
// count as a vacuous full match (1.0), exactly one empty sequence as no
// possible overlap (0.0), and an empty joint vocabulary as no detectable
// overlap (0.0).

use serde::Serialize;
use tracing::info;

use crate::normalize::normalize;
use crate::similarity::{cosine, SimilarityBand};
use crate::tokens::Tokenizer;
use crate::vector::{build_pair, VectorConfig, VectorError};

/// Everything one comparison reports.
#[derive(Debug, Serialize)]
pub struct Comparison {
    /// Cosine similarity in [0, 1], rounded to 4 fractional digits.
    pub score: f64,
    pub band: SimilarityBand,
    pub original_tokens: usize,
    pub candidate_tokens: usize,
    /// Joint vocabulary size; 0 when vectorization was short-circuited.
    pub vocabulary_size: usize,
}

/// One-shot, two-document comparison pipeline.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and compared pairs without coordination.
pub struct Pipeline {
    tokenizer: Tokenizer,
    vector_config: VectorConfig,
}

impl Pipeline {
    pub fn new(tokenizer: Tokenizer, vector_config: VectorConfig) -> Self {
        Self {
            tokenizer,
            vector_config,
        }
    }

    /// Normalize and tokenize one raw document.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        self.tokenizer.tokenize(&normalize(raw))
    }

    /// Score two raw documents. See [`Pipeline::compare`] for the full
    /// report.
    pub fn similarity(&self, original: &str, candidate: &str) -> f64 {
        self.compare(original, candidate).score
    }

    /// Run the full pipeline over a document pair.
    pub fn compare(&self, original: &str, candidate: &str) -> Comparison {
        let tokens_a = self.tokenize(original);
        let tokens_b = self.tokenize(candidate);

        let (score, vocabulary_size) = match (tokens_a.is_empty(), tokens_b.is_empty()) {
            (true, true) => (1.0, 0),
            (true, false) | (false, true) => (0.0, 0),
            (false, false) => match build_pair(&tokens_a, &tokens_b, &self.vector_config) {
                Ok(pair) => (
                    round4(cosine(&pair.original, &pair.candidate)),
                    pair.vocabulary.len(),
                ),
                Err(VectorError::EmptyVocabulary) => (0.0, 0),
            },
        };

        info!(
            score,
            original_tokens = tokens_a.len(),
            candidate_tokens = tokens_b.len(),
            vocabulary_size,
            "Compared documents"
        );

        Comparison {
            score,
            band: SimilarityBand::from_score(score),
            original_tokens: tokens_a.len(),
            candidate_tokens: tokens_b.len(),
            vocabulary_size,
        }
    }
}

/// Round to 4 fractional digits.
fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
