//! Directory scanner for the batch driver.
//!
//! Lists the immediate entries of one directory (no recursion) in file-name
//! order and sorts them into documents and skipped entries.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{FmError, Result};

/// What to do with directory entries that are not regular files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFilePolicy {
    /// The directory must be flat; any subdirectory aborts the scan.
    #[default]
    Reject,
    /// Report non-file entries as skipped.
    Skip,
}

/// Decides which directory entries are documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub non_files: NonFilePolicy,
    /// Allowed extensions without the dot. Empty allows every file.
    pub extensions: Vec<String>,
    /// File-name patterns to leave alone (`*.bak`, `draft-*`, `README.md`).
    pub excludes: Vec<String>,
}

impl EntryFilter {
    /// Why a file would be skipped, or `None` if it is a document.
    fn skip_reason(&self, path: &Path) -> Option<SkipReason> {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

        if self.excludes.iter().any(|p| matches_pattern(&name, p)) {
            return Some(SkipReason::Excluded);
        }

        if !self.extensions.is_empty() {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !self.extensions.iter().any(|allowed| allowed.trim_start_matches('.') == ext) {
                return Some(SkipReason::Extension);
            }
        }

        None
    }
}

/// Simple file-name pattern matching: `*suffix`, `prefix*`, or exact.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        return name.ends_with(suffix);
    }
    if let Some(prefix) = pattern.strip_suffix('*') {
        return name.starts_with(prefix);
    }
    name == pattern
}

/// Why an entry was left out of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAFile,
    Extension,
    Excluded,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::NotAFile => "not a file",
            SkipReason::Extension => "extension not selected",
            SkipReason::Excluded => "excluded",
        }
    }
}

/// Result of scanning a batch directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Documents to process, in file-name order.
    pub documents: Vec<PathBuf>,
    /// Entries left out, with the reason.
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Scan the immediate entries of `root`.
///
/// Fails if `root` is not a readable directory, or if it contains a
/// non-file entry under [`NonFilePolicy::Reject`]. Nothing is written here,
/// so a rejected directory fails before any document is touched.
pub fn scan_directory(root: &Path, filter: &EntryFilter) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(FmError::Io {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut result = ScanResult::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FmError::Io {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if !path.is_file() {
            match filter.non_files {
                NonFilePolicy::Reject => {
                    return Err(FmError::Config {
                        message: format!("{} is not a file", path.display()),
                        help: Some(
                            "The batch directory must be flat; use --skip-non-files to skip other entries"
                                .to_string(),
                        ),
                    });
                }
                NonFilePolicy::Skip => {
                    result.skipped.push((path.to_path_buf(), SkipReason::NotAFile));
                    continue;
                }
            }
        }

        match filter.skip_reason(path) {
            Some(reason) => result.skipped.push((path.to_path_buf(), reason)),
            None => result.documents.push(path.to_path_buf()),
        }
    }

    Ok(result)
}
