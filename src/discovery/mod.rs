//! Locating the documents of a batch run.
//!
//! A batch covers the immediate entries of one directory. The optional
//! `fmedit.yaml` manifest supplies the directory, the entry filter, and the
//! edits to apply.
//!
//! # Example
//!
//! ```ignore
//! use fmedit::discovery::{scan_directory, EntryFilter};
//!
//! let scan = scan_directory(Path::new("_educators"), &EntryFilter::default())?;
//! println!("Found {} documents", scan.documents.len());
//! ```

mod manifest;
mod scanner;

pub use manifest::Manifest;
pub use scanner::{scan_directory, EntryFilter, NonFilePolicy, ScanResult, SkipReason};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "fmedit.yaml";
