//! fmedit - Bulk editor for YAML front matter
//!
//! A library for rewriting the `---` delimited YAML header of Jekyll-style
//! documents while leaving their bodies untouched.

pub mod batch;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod rewrite;
pub mod transform;

pub use batch::{check_directory, run_batch, run_batch_with, BatchObserver, BatchOptions, BatchReport};
pub use discovery::{scan_directory, EntryFilter, Manifest, NonFilePolicy, ScanResult, SkipReason};
pub use error::{FmError, Result};
pub use parser::{extract_frontmatter, parse_document, Document, FrontmatterResult};
pub use rewrite::{preview, read_document, read_transform_write, Preview, Rewrite};
pub use transform::{apply_transform, identity, EditList, EditOp, Transform};
