// Stopword set: immutable after construction, O(1) membership.
//
// The built-in default targets academic text in Chinese. It combines the
// generic function-word list from the `stop-words` crate with
// thesis-structure terms (section headings, boilerplate) that carry no
// topical signal but show up in every paper.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};

/// Thesis-structure terms filtered on top of the generic stopword list.
const PAPER_TERMS: &[&str] = &[
    "摘要", "关键词", "引言", "正文", "结论", "参考文献", "致谢",
    "第一章", "第二章", "第三章", "第一节", "第二节", "第三节",
];

pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in default: generic Chinese function words plus the paper
    /// terms above.
    pub fn builtin() -> Self {
        let mut words: HashSet<String> = get(LANGUAGE::Chinese).into_iter().collect();
        words.extend(PAPER_TERMS.iter().map(|s| s.to_string()));
        Self { words }
    }

    /// Load a stopword list from a file, one word per line. Blank lines and
    /// `#`-prefixed lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read stopword list {}", path.display()))?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Ok(Self { words })
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_covers_function_words_and_paper_terms() {
        let set = StopwordSet::builtin();
        assert!(set.contains("的"));
        assert!(set.contains("是"));
        assert!(set.contains("参考文献"));
        assert!(!set.contains("天气"));
    }

    #[test]
    fn from_file_skips_blanks_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file, "的").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  是  ").unwrap();
        file.flush().unwrap();

        let set = StopwordSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("的"));
        assert!(set.contains("是"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(StopwordSet::from_file(Path::new("/nonexistent/stopwords.txt")).is_err());
    }
}
