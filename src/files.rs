// Document reading and result writing.
//
// Every filesystem failure surfaces here with a distinct, user-readable
// message; the scoring core performs no I/O.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read a document as UTF-8 text.
///
/// Missing paths, directories, unreadable files and non-UTF-8 content each
/// produce their own error message.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    if !path.is_file() {
        bail!("not a regular file: {}", path.display());
    }
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8 text", path.display()))
}

/// Write the similarity score with exactly two fractional digits, so 0.8
/// persists as "0.80".
pub fn write_score(path: &Path, score: f64) -> Result<()> {
    fs::write(path, format!("{score:.2}"))
        .with_context(|| format!("failed to write result to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_utf8_documents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "今天天气真好 Hello").unwrap();
        file.flush().unwrap();
        assert_eq!(read_document(file.path()).unwrap(), "今天天气真好 Hello");
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = read_document(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x80]).unwrap();
        file.flush().unwrap();
        let err = read_document(file.path()).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn score_is_written_with_two_digits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        write_score(&path, 0.8).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0.80");

        write_score(&path, 0.8254).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0.83");
    }
}
