use std::path::{Path, PathBuf};

/// Class and function names found in a single source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatchRecord {
    pub path: PathBuf,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
}

impl FileMatchRecord {
    pub fn new(path: impl Into<PathBuf>, classes: Vec<String>, functions: Vec<String>) -> Self {
        Self {
            path: path.into(),
            classes,
            functions,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }

    pub fn has_functions(&self) -> bool {
        !self.functions.is_empty()
    }

    /// True when the file contributes nothing to the report
    pub fn is_empty(&self) -> bool {
        !self.has_classes() && !self.has_functions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = FileMatchRecord::new("lib/empty.dart", vec![], vec![]);
        assert!(record.is_empty());
        assert!(!record.has_classes());
        assert!(!record.has_functions());
    }

    #[test]
    fn test_independent_flags() {
        let record = FileMatchRecord::new("lib/util.dart", vec![], vec!["format".to_string()]);
        assert!(!record.is_empty());
        assert!(!record.has_classes());
        assert!(record.has_functions());
        assert_eq!(record.path(), Path::new("lib/util.dart"));
    }
}
