// Text normalization, the first pipeline stage.
//
// Strips every character that is not a CJK ideograph, an ASCII letter, a
// digit, or whitespace, and separates CJK runs from adjacent letter/digit
// runs so the segmenter never sees "中文ABC" as one fused span.

use std::sync::OnceLock;

use regex_lite::Regex;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// CJK Unified Ideographs, Extension A, and Compatibility Ideographs.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |
        '\u{3400}'..='\u{4DBF}' |
        '\u{F900}'..='\u{FAFF}'
    )
}

#[derive(Clone, Copy, PartialEq)]
enum ScriptClass {
    Cjk,
    Latin,
}

/// Normalize raw document text for segmentation.
///
/// Keeps CJK ideographs, ASCII letters, digits and whitespace; every other
/// character is removed. A single space is inserted at each boundary between
/// a CJK ideograph and an adjacent letter/digit run (both directions),
/// whitespace runs collapse to one space, and the result has no leading or
/// trailing space.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    let mut prev: Option<ScriptClass> = None;

    for c in text.chars() {
        if c.is_whitespace() {
            kept.push(' ');
            prev = None;
            continue;
        }

        let class = if is_cjk_ideograph(c) {
            ScriptClass::Cjk
        } else if c.is_ascii_alphanumeric() {
            ScriptClass::Latin
        } else {
            // Punctuation and symbols vanish without becoming a boundary,
            // so "中文！ABC" and "中文ABC" normalize identically.
            continue;
        };

        if prev.is_some_and(|p| p != class) {
            kept.push(' ');
        }
        kept.push(c);
        prev = Some(class);
    }

    whitespace_re().replace_all(&kept, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_separates_scripts() {
        assert_eq!(
            normalize("今天天气真好！Hello, world! 123"),
            "今天天气真好 Hello world 123"
        );
    }

    #[test]
    fn inserts_boundary_in_both_directions() {
        assert_eq!(normalize("abc中文def"), "abc 中文 def");
        assert_eq!(normalize("42度"), "42 度");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("！？。，,.!?  \t"), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "今天天气真好！Hello, world! 123",
            "abc中文def",
            "   spaced    out   ",
            "",
            "纯中文文本没有标点",
            "English only, with punctuation.",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn punctuation_between_same_script_runs_is_not_a_boundary() {
        assert_eq!(normalize("don't"), "dont");
        assert_eq!(normalize("中，文"), "中文");
    }
}
