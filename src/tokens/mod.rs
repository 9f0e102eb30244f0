// Tokenization: dictionary-aware segmentation plus the post-filter chain.

pub mod filter;
pub mod stopwords;

use std::time::Instant;

use tracing::debug;

use crate::segment::Segmenter;

pub use filter::TokenFilter;
pub use stopwords::StopwordSet;

/// Segments normalized text and filters the result.
///
/// Output order is first-occurrence order in the source text, and the whole
/// step is deterministic for a fixed segmenter/stopword configuration.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
    filter: TokenFilter,
}

impl Tokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>, filter: TokenFilter) -> Self {
        Self { segmenter, filter }
    }

    /// Tokenize already-normalized text. Empty input yields an empty
    /// sequence without invoking the segmenter.
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        if normalized.is_empty() {
            return Vec::new();
        }

        let start = Instant::now();
        let raw = self.segmenter.segment(normalized);
        let segment_time = start.elapsed();

        let start = Instant::now();
        let segmented = raw.len();
        let tokens = self.filter.apply(raw);
        let filter_time = start.elapsed();

        debug!(
            ?segment_time,
            ?filter_time,
            segmented,
            kept = tokens.len(),
            "Tokenized document"
        );
        tokens
    }
}
