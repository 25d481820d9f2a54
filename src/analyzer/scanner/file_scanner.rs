use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::constants::scan::TARGET_EXTENSION;
use crate::types::{Result, SummaryError};

/// Walks a directory tree and yields every `.dart` file beneath it.
///
/// Every directory is visited, hidden ones included, and no ignore files are
/// honoured. Symlinked directories are listed but never descended into.
/// Entries come out sorted by file name so repeated runs agree on order.
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree. The first traversal error is yielded as `Err`.
    pub fn walk(&self) -> impl Iterator<Item = Result<ScannedFile>> + '_ {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        walker.filter_map(|entry| match entry {
            Ok(entry) => Self::select(entry).map(Ok),
            Err(e) => Some(Err(SummaryError::from(e))),
        })
    }

    /// Collect every selected file, failing on the first traversal error
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        self.walk().collect()
    }

    fn select(entry: DirEntry) -> Option<ScannedFile> {
        // The root itself is never a candidate, even when it is a file
        if entry.depth() == 0 || is_directory(&entry) {
            return None;
        }

        if !has_target_extension(entry.file_name()) {
            trace!(path = %entry.path().display(), "Skipping non-target file");
            return None;
        }

        Some(ScannedFile {
            path: entry.into_path(),
        })
    }
}

/// Suffix test on the file name only; content is never inspected
pub fn has_target_extension(file_name: &OsStr) -> bool {
    file_name.to_string_lossy().ends_with(TARGET_EXTENSION)
}

fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_dir(),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
}
