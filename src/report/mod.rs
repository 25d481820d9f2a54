//! Summary Report
//!
//! Accumulates per-file findings in traversal order and renders them as the
//! plain-text summary. The report lives in memory until the scan finishes,
//! so an aborted scan never leaves a partial file behind.

mod block;

pub use block::ReportBlock;

use std::fs;
use std::path::Path;

use crate::constants::report::BLOCK_SEPARATOR;
use crate::types::{FileMatchRecord, Result, SummaryError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    blocks: Vec<ReportBlock>,
    files_scanned: usize,
    files_with_findings: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the blocks for one processed file
    ///
    /// A Classes block is added only when classes were found, a Functions
    /// line only when functions were found.
    pub fn push(&mut self, record: FileMatchRecord) {
        self.files_scanned += 1;
        if record.is_empty() {
            return;
        }
        self.files_with_findings += 1;

        let FileMatchRecord {
            path,
            classes,
            functions,
        } = record;

        if !classes.is_empty() {
            self.blocks.push(ReportBlock::classes(&path, classes));
        }
        if !functions.is_empty() {
            self.blocks.push(ReportBlock::functions(functions));
        }
    }

    pub fn blocks(&self) -> &[ReportBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of files that were read and matched
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Number of files that contributed at least one block
    pub fn files_with_findings(&self) -> usize {
        self.files_with_findings
    }

    /// Blocks joined by newlines, without a trailing newline
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }

    /// Write the rendered report to `path`, replacing any previous content
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|e| SummaryError::write(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(path: &str, classes: &[&str], functions: &[&str]) -> FileMatchRecord {
        FileMatchRecord::new(
            path,
            classes.iter().map(|s| s.to_string()).collect(),
            functions.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let mut report = Report::new();
        report.push(record("./empty.dart", &[], &[]));

        assert!(report.is_empty());
        assert_eq!(report.render(), "");
        assert_eq!(report.files_scanned(), 1);
        assert_eq!(report.files_with_findings(), 0);
    }

    #[test]
    fn test_class_and_function_lines_are_independent() {
        let mut report = Report::new();
        report.push(record("./a.dart", &["A"], &[]));
        report.push(record("./b.dart", &[], &["helper"]));
        report.push(record("./c.dart", &["C", "D"], &["build", "dispose"]));

        assert_eq!(report.blocks().len(), 4);
        assert_eq!(
            report.render(),
            "\n📌 File: ./a.dart\nClasses: A\n\
             Functions: helper\n\
             \n📌 File: ./c.dart\nClasses: C, D\n\
             Functions: build, dispose"
        );
        assert_eq!(report.files_scanned(), 3);
        assert_eq!(report.files_with_findings(), 3);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("summary.txt");
        fs::write(&output, "stale content that is much longer than the report").unwrap();

        let mut report = Report::new();
        report.push(record("./x.dart", &["X"], &[]));
        report.save(&output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\n📌 File: ./x.dart\nClasses: X"
        );
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("summary.txt");

        let err = Report::new().save(&output).unwrap_err();
        assert!(matches!(err, SummaryError::Write { .. }));
    }
}
