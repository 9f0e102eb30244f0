// Segmenter trait, a swap-ready abstraction.
//
// The tokenizer needs exactly one operation from a segmenter, so alternative
// backends (rule-based, statistical, model-based) can replace the default
// jieba implementation without touching the filtering logic.

/// Trait for splitting normalized text into word-like tokens.
///
/// Implementations must be deterministic: the same input always produces
/// the same token sequence, in source order. Whitespace-only tokens may be
/// emitted; the tokenizer filters them out.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Splits on Unicode whitespace only.
///
/// Useful when the input was segmented upstream, and as a lightweight
/// stand-in for tests that should not depend on a segmentation dictionary.
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_segmenter_splits_on_runs() {
        let tokens = WhitespaceSegmenter.segment("a  b\tc");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn whitespace_segmenter_empty_input() {
        assert!(WhitespaceSegmenter.segment("").is_empty());
        assert!(WhitespaceSegmenter.segment("   ").is_empty());
    }
}
