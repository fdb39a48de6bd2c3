//! Project manifest (fmedit.yaml) parsing.
//!
//! The manifest stores the batch directory, the entry filter, and a list of
//! edits so a recurring maintenance pass can be rerun without retyping flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FmError, Result};
use crate::transform::EditOp;

use super::scanner::{EntryFilter, NonFilePolicy};

/// Project manifest loaded from fmedit.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory whose entries are rewritten.
    pub directory: Option<PathBuf>,

    /// Extensions to treat as documents. Empty means every file.
    pub extensions: Vec<String>,

    /// File-name patterns to leave alone.
    pub excludes: Vec<String>,

    /// Handling of subdirectories and other non-file entries.
    pub non_files: NonFilePolicy,

    /// Edits applied to every header, in order.
    pub edits: Vec<EditOp>,
}

impl Manifest {
    /// Load manifest from a fmedit.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FmError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check fmedit.yaml syntax".to_string()),
        })
    }

    /// Load `path` if given, otherwise `fmedit.yaml` in `dir` if it exists.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Option<Self>> {
        if let Some(path) = path {
            return Self::load(path).map(Some);
        }

        let default_path = dir.join(super::MANIFEST_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Entry filter described by this manifest.
    pub fn entry_filter(&self) -> EntryFilter {
        EntryFilter {
            non_files: self.non_files,
            extensions: self.extensions.clone(),
            excludes: self.excludes.clone(),
        }
    }
}
