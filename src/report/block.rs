use std::fmt;
use std::path::Path;

use crate::constants::report::{FILE_MARKER, NAME_SEPARATOR};

/// One unit of report text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    /// File header followed by the class names found in it
    Classes { path: String, names: Vec<String> },
    /// Function names only; carries no file header of its own
    Functions { names: Vec<String> },
}

impl ReportBlock {
    pub fn classes(path: &Path, names: Vec<String>) -> Self {
        Self::Classes {
            path: path.display().to_string(),
            names,
        }
    }

    pub fn functions(names: Vec<String>) -> Self {
        Self::Functions { names }
    }

    pub fn names(&self) -> &[String] {
        match self {
            Self::Classes { names, .. } | Self::Functions { names } => names,
        }
    }
}

impl fmt::Display for ReportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classes { path, names } => write!(
                f,
                "\n{} File: {}\nClasses: {}",
                FILE_MARKER,
                path,
                names.join(NAME_SEPARATOR)
            ),
            Self::Functions { names } => write!(f, "Functions: {}", names.join(NAME_SEPARATOR)),
        }
    }
}
