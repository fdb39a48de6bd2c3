//! Read-transform-write cycle for a single document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FmError, Result};
use crate::parser::Document;
use crate::transform::{apply_transform, Transform};

/// Outcome of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub path: PathBuf,
    /// Whether the new text differs from what was on disk.
    pub changed: bool,
}

/// The document text before and after a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub original: String,
    pub rewritten: String,
}

impl Preview {
    pub fn changed(&self) -> bool {
        self.original != self.rewritten
    }
}

/// Read a document and parse it.
pub fn read_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path).map_err(|e| FmError::io(path, e))?;
    Document::parse(&source)
}

/// Compute the rewritten text of a document without touching the file.
pub fn preview<T: Transform + ?Sized>(path: &Path, transform: &T) -> Result<Preview> {
    let original = fs::read_to_string(path).map_err(|e| FmError::io(path, e))?;

    let rewritten = Document::parse(&original)?
        .map_header(|header| apply_transform(header, transform))
        .render()?;

    Ok(Preview {
        original,
        rewritten,
    })
}

/// Open a document, transform its header, and overwrite it in place.
///
/// The file is always rewritten, even when the text is unchanged. No backup
/// is taken.
pub fn read_transform_write<T: Transform + ?Sized>(path: &Path, transform: &T) -> Result<Rewrite> {
    let preview = preview(path, transform)?;

    fs::write(path, &preview.rewritten).map_err(|e| FmError::io(path, e))?;

    Ok(Rewrite {
        path: path.to_path_buf(),
        changed: preview.changed(),
    })
}
