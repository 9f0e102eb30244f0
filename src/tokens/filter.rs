// Token post-filter, applied after segmentation in a fixed order:
// whitespace-only tokens, then stopwords, then short tokens.

use super::stopwords::StopwordSet;

/// Filters a segmenter's raw output down to scoring-relevant tokens.
pub struct TokenFilter {
    stopwords: StopwordSet,
    min_chars: usize,
}

impl TokenFilter {
    /// `keep_single` retains single-character tokens. The default pipeline
    /// drops them, trading recall on short inputs for precision; lengths are
    /// counted in characters, not bytes.
    pub fn new(stopwords: StopwordSet, keep_single: bool) -> Self {
        Self {
            stopwords,
            min_chars: if keep_single { 1 } else { 2 },
        }
    }

    /// Apply the filter chain, preserving source order.
    pub fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .filter(|t| !self.stopwords.contains(t))
            .filter(|t| t.chars().count() >= self.min_chars)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn drops_whitespace_only_tokens() {
        let filter = TokenFilter::new(StopwordSet::empty(), true);
        assert_eq!(
            filter.apply(owned(&["aa", " ", "\t", "bb"])),
            owned(&["aa", "bb"])
        );
    }

    #[test]
    fn drops_stopwords_verbatim() {
        let filter = TokenFilter::new(["的", "是", "在"].into_iter().collect(), true);
        assert!(filter.apply(owned(&["的", "是", "在"])).is_empty());
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        // "中" is one character but three bytes; it must still be dropped
        // by the single-character rule.
        let filter = TokenFilter::new(StopwordSet::empty(), false);
        assert_eq!(filter.apply(owned(&["中", "中文"])), owned(&["中文"]));
    }

    #[test]
    fn keep_single_retains_one_char_tokens() {
        let filter = TokenFilter::new(StopwordSet::empty(), true);
        assert_eq!(filter.apply(owned(&["a", "中"])), owned(&["a", "中"]));
    }
}
