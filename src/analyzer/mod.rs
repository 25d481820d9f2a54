//! Code Analyzer Module
//!
//! Pattern-based summary of a Dart codebase:
//! - File scanning (`.dart` selection over the whole tree)
//! - Source reading (UTF-8, normalised line endings)
//! - Class and function signature extraction

pub mod extractor;
pub mod scanner;
pub mod source;
pub mod summarizer;

pub use extractor::SignatureExtractor;
pub use scanner::{FileScanner, ScannedFile};
pub use source::read_source;
pub use summarizer::{Summarizer, run};
