//! Summarizer
//!
//! Drives the scan: walk, read, extract, accumulate. Files are processed one
//! at a time in traversal order and the first error aborts the whole run.

use std::path::Path;
use tracing::debug;

use super::extractor::SignatureExtractor;
use super::scanner::FileScanner;
use super::source::read_source;
use crate::report::Report;
use crate::types::Result;

pub struct Summarizer {
    scanner: FileScanner,
    extractor: SignatureExtractor,
}

impl Summarizer {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::new(root),
            extractor: SignatureExtractor::new()?,
        })
    }

    pub fn summarize(&self) -> Result<Report> {
        let mut report = Report::new();

        for file in self.scanner.walk() {
            let file = file?;
            let content = read_source(&file.path)?;
            let record = self.extractor.extract(&file.path, &content);

            debug!(
                path = %file.path.display(),
                classes = record.classes.len(),
                functions = record.functions.len(),
                "Summarized file"
            );

            report.push(record);
        }

        debug!(
            root = %self.scanner.root().display(),
            files = report.files_scanned(),
            with_findings = report.files_with_findings(),
            blocks = report.blocks().len(),
            "Scan complete"
        );

        Ok(report)
    }

    /// Summarize and write the report to `output`
    pub fn run<P: AsRef<Path>>(&self, output: P) -> Result<Report> {
        let report = self.summarize()?;
        report.save(output.as_ref())?;
        debug!(output = %output.as_ref().display(), "Report written");
        Ok(report)
    }
}

/// Summarize every `.dart` file under `root` into `output`
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(root: P, output: Q) -> Result<Report> {
    Summarizer::new(root)?.run(output)
}
