pub mod check;
pub mod completions;
pub mod rewrite;
pub mod show;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::discovery::{EntryFilter, Manifest, NonFilePolicy};
use crate::error::{FmError, Result};

/// fmedit - Bulk editor for YAML front matter
#[derive(Parser, Debug)]
#[command(name = "fmedit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply header edits to every document in a directory
    Rewrite(rewrite::RewriteArgs),

    /// Parse every document in a directory without writing
    Check(check::CheckArgs),

    /// Print the parsed header of one document as YAML
    Show(show::ShowArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Directory selection shared by `rewrite` and `check`.
#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Directory of documents (default: `directory` from fmedit.yaml)
    pub directory: Option<PathBuf>,

    /// Manifest file (default: fmedit.yaml in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only treat files with this extension as documents (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Leave files matching this name pattern alone (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Skip subdirectories instead of failing on them
    #[arg(long)]
    pub skip_non_files: bool,

    /// Only report errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl DirectoryArgs {
    /// Load the manifest, if any.
    pub fn manifest(&self) -> Result<Manifest> {
        Ok(Manifest::discover(self.config.as_deref(), Path::new("."))?.unwrap_or_default())
    }

    /// Resolve the batch directory from the arguments, then the manifest.
    pub fn resolve_directory(&self, manifest: &Manifest) -> Result<PathBuf> {
        self.directory
            .clone()
            .or_else(|| manifest.directory.clone())
            .ok_or_else(|| FmError::Config {
                message: "no directory given".to_string(),
                help: Some("Pass a directory or set `directory:` in fmedit.yaml".to_string()),
            })
    }

    /// Entry filter from the manifest, overridden by flags.
    pub fn entry_filter(&self, manifest: &Manifest) -> EntryFilter {
        let mut filter = manifest.entry_filter();
        if !self.extensions.is_empty() {
            filter.extensions = self.extensions.clone();
        }
        filter.excludes.extend(self.excludes.iter().cloned());
        if self.skip_non_files {
            filter.non_files = NonFilePolicy::Skip;
        }
        filter
    }
}
