//! Source Reader
//!
//! Reads a whole source file as UTF-8 text. Line endings are normalised to
//! `\n` so single-line patterns behave the same on every platform.

use std::fs;
use std::path::Path;

use crate::types::{Result, SummaryError};

/// Read `path` fully. Unreadable files and invalid UTF-8 are errors.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| SummaryError::read(path, e))?;

    let text = String::from_utf8(bytes).map_err(|source| SummaryError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_newlines(text))
}

/// Convert `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FailureStage;
    use tempfile::TempDir;

    #[test]
    fn test_read_utf8_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("greeting.dart");
        fs::write(&path, "// héllo\nclass Greeting {}").unwrap();

        let content = read_source(&path).unwrap();
        assert_eq!(content, "// héllo\nclass Greeting {}");
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crlf.dart");
        fs::write(&path, "class A {}\r\nclass B {}\rclass C {}").unwrap();

        let content = read_source(&path).unwrap();
        assert_eq!(content, "class A {}\nclass B {}\nclass C {}");
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.dart");
        fs::write(&path, [0x63, 0x6c, 0xff, 0xfe, 0x00]).unwrap();

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, SummaryError::Decode { .. }));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = read_source(&temp.path().join("gone.dart")).unwrap_err();
        assert!(matches!(err, SummaryError::Read { .. }));
        assert_eq!(err.stage(), FailureStage::Read);
    }

    #[test]
    fn test_normalize_without_carriage_returns() {
        assert_eq!(normalize_newlines("a\nb".to_string()), "a\nb");
        assert_eq!(normalize_newlines("a\r\n\r\nb".to_string()), "a\n\nb");
    }
}
